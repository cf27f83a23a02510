use super::Mentionable;
use crate::enums::{
    ChannelType, ContextType, InstallationType, Locale, PermissionType, SlashCommandOptionType,
};
use crate::error::{BridgeError, BridgeResult};
use discord_bridge_types::Snowflake;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_DESCRIPTION_LENGTH: usize = 100;
pub const MAX_OPTION_COUNT: usize = 25;
pub const MAX_CHOICE_COUNT: usize = 25;

/// A registered slash command.
pub trait SlashCommand: Mentionable {
    fn name(&self) -> String;

    fn description(&self) -> String;

    /// The owning server, or `None` for global commands.
    fn server_id(&self) -> Option<Snowflake>;

    fn options(&self) -> Vec<SlashCommandOptionData>;

    fn contexts(&self) -> BTreeSet<ContextType>;

    fn installation_types(&self) -> BTreeSet<InstallationType>;

    fn nsfw(&self) -> bool;
}

// ================================================================
// Registration data
// ================================================================

/// A slash command to register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandData {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub name_localizations: BTreeMap<Locale, String>,
    #[serde(default)]
    pub description_localizations: BTreeMap<Locale, String>,
    #[serde(default)]
    pub options: Vec<SlashCommandOptionData>,
    /// `None` leaves the default (everyone may use the command).
    #[serde(default)]
    pub required_permissions: Option<BTreeSet<PermissionType>>,
    #[serde(default)]
    pub contexts: BTreeSet<ContextType>,
    #[serde(default)]
    pub installation_types: BTreeSet<InstallationType>,
    #[serde(default)]
    pub nsfw: bool,
}

impl SlashCommandData {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            name_localizations: BTreeMap::new(),
            description_localizations: BTreeMap::new(),
            options: Vec::new(),
            required_permissions: None,
            contexts: BTreeSet::new(),
            installation_types: BTreeSet::new(),
            nsfw: false,
        }
    }

    pub fn with_option(mut self, option: SlashCommandOptionData) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_localized_name(mut self, locale: Locale, name: impl Into<String>) -> Self {
        self.name_localizations.insert(locale, name.into());
        self
    }

    pub fn with_localized_description(
        mut self,
        locale: Locale,
        description: impl Into<String>,
    ) -> Self {
        self.description_localizations.insert(locale, description.into());
        self
    }

    pub fn with_required_permissions(
        mut self,
        permissions: impl IntoIterator<Item = PermissionType>,
    ) -> Self {
        self.required_permissions = Some(permissions.into_iter().collect());
        self
    }

    pub fn with_contexts(mut self, contexts: impl IntoIterator<Item = ContextType>) -> Self {
        self.contexts = contexts.into_iter().collect();
        self
    }

    pub fn with_installation_types(
        mut self,
        types: impl IntoIterator<Item = InstallationType>,
    ) -> Self {
        self.installation_types = types.into_iter().collect();
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Checks the limits Discord enforces on registration.
    pub fn validate(&self) -> BridgeResult<()> {
        check_name(&self.name, "name")?;
        check_description(&self.description, "description")?;
        for name in self.name_localizations.values() {
            check_name(name, "localized name")?;
        }
        for description in self.description_localizations.values() {
            check_description(description, "localized description")?;
        }
        if self.options.len() > MAX_OPTION_COUNT {
            return Err(invalid(format!(
                "command '{}' has more than {} options",
                self.name, MAX_OPTION_COUNT
            )));
        }
        self.options.iter().try_for_each(SlashCommandOptionData::validate)
    }
}

/// One option of a slash command, or a subcommand with nested options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandOptionData {
    pub name: String,
    pub description: String,
    pub option_type: SlashCommandOptionType,
    #[serde(default)]
    pub name_localizations: BTreeMap<Locale, String>,
    #[serde(default)]
    pub description_localizations: BTreeMap<Locale, String>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub autocompletable: bool,
    #[serde(default)]
    pub choices: Vec<SlashCommandOptionChoiceData>,
    #[serde(default)]
    pub options: Vec<SlashCommandOptionData>,
    /// Restricts `Channel` options to these channel types. Empty means any.
    #[serde(default)]
    pub channel_types: BTreeSet<ChannelType>,
}

fn default_required() -> bool {
    true
}

impl SlashCommandOptionData {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        option_type: SlashCommandOptionType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            option_type,
            name_localizations: BTreeMap::new(),
            description_localizations: BTreeMap::new(),
            required: true,
            autocompletable: false,
            choices: Vec::new(),
            options: Vec::new(),
            channel_types: BTreeSet::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn autocompletable(mut self, autocompletable: bool) -> Self {
        self.autocompletable = autocompletable;
        self
    }

    pub fn with_choice(mut self, choice: SlashCommandOptionChoiceData) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn with_option(mut self, option: SlashCommandOptionData) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_channel_types(mut self, types: impl IntoIterator<Item = ChannelType>) -> Self {
        self.channel_types = types.into_iter().collect();
        self
    }

    pub fn validate(&self) -> BridgeResult<()> {
        check_name(&self.name, "option name")?;
        check_description(&self.description, "option description")?;
        if self.option_type == SlashCommandOptionType::Unknown {
            return Err(invalid(format!("option '{}' has type UNKNOWN", self.name)));
        }
        if !self.options.is_empty() && !self.option_type.is_subcommand() {
            return Err(invalid(format!(
                "option '{}' of type {} cannot have nested options",
                self.name, self.option_type
            )));
        }
        if !self.channel_types.is_empty() && self.option_type != SlashCommandOptionType::Channel {
            return Err(invalid(format!(
                "option '{}' restricts channel types but is {}",
                self.name, self.option_type
            )));
        }
        if self.options.len() > MAX_OPTION_COUNT {
            return Err(invalid(format!(
                "option '{}' has more than {} options",
                self.name, MAX_OPTION_COUNT
            )));
        }
        if self.choices.len() > MAX_CHOICE_COUNT {
            return Err(invalid(format!(
                "option '{}' has more than {} choices",
                self.name, MAX_CHOICE_COUNT
            )));
        }
        for choice in &self.choices {
            if choice.value.option_type() != self.option_type {
                return Err(invalid(format!(
                    "choice '{}' of option '{}' is not a {}",
                    choice.name, self.name, self.option_type
                )));
            }
        }
        self.options.iter().try_for_each(Self::validate)
    }
}

/// A fixed value a user may pick for an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandOptionChoiceData {
    pub name: String,
    #[serde(default)]
    pub name_localizations: BTreeMap<Locale, String>,
    pub value: ChoiceValue,
}

impl SlashCommandOptionChoiceData {
    pub fn new(name: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            name: name.into(),
            name_localizations: BTreeMap::new(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

impl ChoiceValue {
    /// The option type a choice with this value belongs to.
    pub fn option_type(&self) -> SlashCommandOptionType {
        match self {
            Self::String(_) => SlashCommandOptionType::String,
            Self::Integer(_) => SlashCommandOptionType::Integer,
            Self::Number(_) => SlashCommandOptionType::Number,
        }
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

fn invalid(message: String) -> BridgeError {
    BridgeError::InvalidCommand(message)
}

fn check_name(name: &str, what: &str) -> BridgeResult<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "{what} '{name}' must be 1 to {MAX_NAME_LENGTH} characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c == '-' || c == '_' || c.is_alphanumeric() || is_indic_or_thai(c))
    {
        return Err(invalid(format!(
            "{what} '{name}' may only contain letters, digits, '-' and '_'"
        )));
    }
    if name.chars().any(char::is_uppercase) {
        return Err(invalid(format!("{what} '{name}' must be lowercase")));
    }
    Ok(())
}

/// Devanagari and Thai are allowed whole, vowel signs and viramas included.
fn is_indic_or_thai(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | '\u{0E00}'..='\u{0E7F}')
}

fn check_description(description: &str, what: &str) -> BridgeResult<()> {
    let len = description.chars().count();
    if description.trim().is_empty() || len > MAX_DESCRIPTION_LENGTH {
        return Err(invalid(format!(
            "{what} must be 1 to {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}
