use super::BridgeEnum;

bridge_enum! {
    /// A language Discord can localize command names and descriptions into.
    pub enum Locale {
        Unknown => "UNKNOWN",
        Danish => "DANISH",
        German => "GERMAN",
        EnglishUk => "ENGLISH_UK",
        EnglishUs => "ENGLISH_US",
        Spanish => "SPANISH",
        SpanishLatam => "SPANISH_LATAM",
        French => "FRENCH",
        Croatian => "CROATIAN",
        Italian => "ITALIAN",
        Lithuanian => "LITHUANIAN",
        Hungarian => "HUNGARIAN",
        Dutch => "DUTCH",
        Norwegian => "NORWEGIAN",
        Polish => "POLISH",
        PortugueseBrazilian => "PORTUGUESE_BRAZILIAN",
        Romanian => "ROMANIAN",
        Finnish => "FINNISH",
        Swedish => "SWEDISH",
        Vietnamese => "VIETNAMESE",
        Turkish => "TURKISH",
        Czech => "CZECH",
        Greek => "GREEK",
        Bulgarian => "BULGARIAN",
        Russian => "RUSSIAN",
        Ukrainian => "UKRAINIAN",
        Hindi => "HINDI",
        Thai => "THAI",
        ChineseChina => "CHINESE_CHINA",
        Japanese => "JAPANESE",
        ChineseTaiwan => "CHINESE_TAIWAN",
        Korean => "KOREAN",
    }
}

impl Locale {
    /// The BCP 47 tag Discord uses for this locale. Empty for `Unknown`.
    pub fn language_tag(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Danish => "da",
            Self::German => "de",
            Self::EnglishUk => "en-GB",
            Self::EnglishUs => "en-US",
            Self::Spanish => "es-ES",
            Self::SpanishLatam => "es-419",
            Self::French => "fr",
            Self::Croatian => "hr",
            Self::Italian => "it",
            Self::Lithuanian => "lt",
            Self::Hungarian => "hu",
            Self::Dutch => "nl",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::PortugueseBrazilian => "pt-BR",
            Self::Romanian => "ro",
            Self::Finnish => "fi",
            Self::Swedish => "sv-SE",
            Self::Vietnamese => "vi",
            Self::Turkish => "tr",
            Self::Czech => "cs",
            Self::Greek => "el",
            Self::Bulgarian => "bg",
            Self::Russian => "ru",
            Self::Ukrainian => "uk",
            Self::Hindi => "hi",
            Self::Thai => "th",
            Self::ChineseChina => "zh-CN",
            Self::Japanese => "ja",
            Self::ChineseTaiwan => "zh-TW",
            Self::Korean => "ko",
        }
    }

    /// Finds the locale for a Discord language tag, ignoring ASCII case.
    pub fn from_language_tag(tag: &str) -> Self {
        Self::declared()
            .find(|l| l.language_tag().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Unknown)
    }
}
