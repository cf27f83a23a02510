//! The in-process Discord client the memory bridge wraps.
//!
//! Models a small slice of a real client library: sessions, guilds,
//! channels, roles, users and application commands, each with its own
//! numeric kinds and flags that only partly line up with the abstract
//! domains.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use thiserror::Error;

/// First ID handed out by a session. Real snowflakes are this large.
const ID_BASE: u64 = 1_100_000_000_000_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("session is closed")]
    SessionClosed,

    #[error("unknown guild {0}")]
    UnknownGuild(u64),

    #[error("unknown channel {0}")]
    UnknownChannel(u64),

    #[error("channel {0} does not accept messages")]
    NotTextChannel(u64),

    #[error("duplicate command name '{0}'")]
    DuplicateCommand(String),

    #[error("interaction {0} was already responded to")]
    AlreadyResponded(u64),

    #[error("interaction {0} has no response yet")]
    NotResponded(u64),

    #[error("unknown message {0}")]
    UnknownMessage(u64),

    #[error("interaction {0} does not accept this kind of response")]
    WrongInteractionKind(u64),
}

pub type MemoryResult<T> = Result<T, MemoryError>;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ================================================================
// Kinds and flags
// ================================================================

/// Channel kinds, with the library's wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryChannelKind {
    Text,
    Dm,
    Voice,
    Category,
    Announcement,
    AnnouncementThread,
    PublicThread,
    PrivateThread,
    StageVoice,
    Forum,
    /// A code this library version does not know.
    Unrecognized(u8),
}

impl MemoryChannelKind {
    pub fn code(&self) -> u8 {
        match self {
            Self::Text => 0,
            Self::Dm => 1,
            Self::Voice => 2,
            Self::Category => 4,
            Self::Announcement => 5,
            Self::AnnouncementThread => 10,
            Self::PublicThread => 11,
            Self::PrivateThread => 12,
            Self::StageVoice => 13,
            Self::Forum => 15,
            Self::Unrecognized(code) => *code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Text,
            1 => Self::Dm,
            2 => Self::Voice,
            4 => Self::Category,
            5 => Self::Announcement,
            10 => Self::AnnouncementThread,
            11 => Self::PublicThread,
            12 => Self::PrivateThread,
            13 => Self::StageVoice,
            15 => Self::Forum,
            other => Self::Unrecognized(other),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Dm
                | Self::Announcement
                | Self::AnnouncementThread
                | Self::PublicThread
                | Self::PrivateThread
        )
    }

    pub fn is_guild(&self) -> bool {
        !matches!(self, Self::Dm | Self::Unrecognized(_))
    }
}

/// Permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryPermission(pub u64);

impl MemoryPermission {
    pub const CREATE_INSTANT_INVITE: Self = Self(1 << 0);
    pub const KICK_MEMBERS: Self = Self(1 << 1);
    pub const BAN_MEMBERS: Self = Self(1 << 2);
    pub const ADMINISTRATOR: Self = Self(1 << 3);
    pub const MANAGE_CHANNELS: Self = Self(1 << 4);
    pub const MANAGE_GUILD: Self = Self(1 << 5);
    pub const ADD_REACTIONS: Self = Self(1 << 6);
    pub const VIEW_AUDIT_LOG: Self = Self(1 << 7);
    pub const VIEW_CHANNEL: Self = Self(1 << 10);
    pub const SEND_MESSAGES: Self = Self(1 << 11);
    pub const MANAGE_MESSAGES: Self = Self(1 << 13);
    pub const EMBED_LINKS: Self = Self(1 << 14);
    pub const ATTACH_FILES: Self = Self(1 << 15);
    pub const READ_MESSAGE_HISTORY: Self = Self(1 << 16);
    pub const MENTION_EVERYONE: Self = Self(1 << 17);
    pub const CONNECT: Self = Self(1 << 20);
    pub const SPEAK: Self = Self(1 << 21);
    pub const CHANGE_NICKNAME: Self = Self(1 << 26);
    pub const MANAGE_ROLES: Self = Self(1 << 28);
    pub const USE_APPLICATION_COMMANDS: Self = Self(1 << 31);
    pub const MODERATE_MEMBERS: Self = Self(1 << 40);

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn is_set_in(&self, bits: u64) -> bool {
        bits & self.0 == self.0
    }
}

/// Message flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryMessageFlag(pub u32);

impl MemoryMessageFlag {
    pub const EPHEMERAL: Self = Self(1 << 6);
    pub const SUPPRESS_NOTIFICATIONS: Self = Self(1 << 12);
}

/// Application command option kinds. Attachments are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOptionKind {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Number,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryContext {
    Guild,
    BotDm,
    PrivateChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryIntegrationType {
    GuildInstall,
    UserInstall,
}

/// A locale by language tag. Only some tags are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryLocale(pub &'static str);

impl MemoryLocale {
    pub const RECOGNIZED: &'static [MemoryLocale] = &[
        MemoryLocale("en-US"),
        MemoryLocale("en-GB"),
        MemoryLocale("de"),
        MemoryLocale("fr"),
        MemoryLocale("es-ES"),
        MemoryLocale("pt-BR"),
        MemoryLocale("ja"),
        MemoryLocale("ko"),
    ];
}

// ================================================================
// Entities
// ================================================================

#[derive(Debug)]
pub struct MemoryUser {
    pub id: u64,
    pub name: String,
    pub bot: bool,
}

#[derive(Debug)]
pub struct MemoryRole {
    pub id: u64,
    pub name: String,
    pub permissions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryMessage {
    pub id: u64,
    pub content: String,
    pub flags: u32,
}

#[derive(Debug)]
pub struct MemoryChannel {
    pub id: u64,
    pub kind: MemoryChannelKind,
    pub name: Option<String>,
    pub topic: Option<String>,
    guild: Weak<MemoryGuild>,
    client: Weak<MemoryClient>,
    messages: RwLock<Vec<MemoryMessage>>,
    deleted: AtomicBool,
}

impl MemoryChannel {
    pub fn guild(&self) -> Option<Arc<MemoryGuild>> {
        self.guild.upgrade()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<MemoryMessage> {
        read(&self.messages).clone()
    }

    /// Posts a message and returns its ID.
    pub fn send(&self, content: &str, flags: u32) -> MemoryResult<u64> {
        let client = self.client.upgrade().ok_or(MemoryError::SessionClosed)?;
        client.ensure_open()?;
        if self.is_deleted() {
            return Err(MemoryError::UnknownChannel(self.id));
        }
        if !self.kind.is_text() {
            return Err(MemoryError::NotTextChannel(self.id));
        }
        let id = client.next_id();
        write(&self.messages).push(MemoryMessage {
            id,
            content: content.to_string(),
            flags,
        });
        Ok(id)
    }

    pub fn delete(&self) -> MemoryResult<()> {
        let client = self.client.upgrade().ok_or(MemoryError::SessionClosed)?;
        client.ensure_open()?;
        if self.deleted.swap(true, Ordering::SeqCst) {
            return Err(MemoryError::UnknownChannel(self.id));
        }
        if let Some(guild) = self.guild() {
            write(&guild.channels).retain(|c| c.id != self.id);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemoryChoice {
    Str(String),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryOptionSpec {
    pub name: String,
    pub description: String,
    pub kind: MemoryOptionKind,
    pub name_localizations: Vec<(MemoryLocale, String)>,
    pub description_localizations: Vec<(MemoryLocale, String)>,
    pub required: bool,
    pub autocomplete: bool,
    pub choices: Vec<(String, MemoryChoice)>,
    pub options: Vec<MemoryOptionSpec>,
    pub channel_kinds: Vec<MemoryChannelKind>,
}

/// What a command is registered with.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCommandSpec {
    pub name: String,
    pub description: String,
    pub name_localizations: Vec<(MemoryLocale, String)>,
    pub description_localizations: Vec<(MemoryLocale, String)>,
    pub options: Vec<MemoryOptionSpec>,
    pub default_member_permissions: Option<u64>,
    pub contexts: Vec<MemoryContext>,
    pub integration_types: Vec<MemoryIntegrationType>,
    pub nsfw: bool,
}

#[derive(Debug)]
pub struct MemoryCommand {
    pub id: u64,
    pub guild_id: Option<u64>,
    pub spec: MemoryCommandSpec,
}

#[derive(Debug)]
pub struct MemoryGuild {
    pub id: u64,
    pub name: String,
    client: Weak<MemoryClient>,
    channels: RwLock<Vec<Arc<MemoryChannel>>>,
    roles: RwLock<Vec<Arc<MemoryRole>>>,
    members: RwLock<Vec<Arc<MemoryUser>>>,
    commands: RwLock<Vec<Arc<MemoryCommand>>>,
}

impl MemoryGuild {
    fn client(&self) -> MemoryResult<Arc<MemoryClient>> {
        let client = self.client.upgrade().ok_or(MemoryError::SessionClosed)?;
        client.ensure_open()?;
        Ok(client)
    }

    pub fn create_channel(
        self: &Arc<Self>,
        kind: MemoryChannelKind,
        name: &str,
    ) -> MemoryResult<Arc<MemoryChannel>> {
        self.insert_channel(kind, name, None)
    }

    pub fn create_text_channel_with_topic(
        self: &Arc<Self>,
        name: &str,
        topic: &str,
    ) -> MemoryResult<Arc<MemoryChannel>> {
        self.insert_channel(MemoryChannelKind::Text, name, Some(topic))
    }

    fn insert_channel(
        self: &Arc<Self>,
        kind: MemoryChannelKind,
        name: &str,
        topic: Option<&str>,
    ) -> MemoryResult<Arc<MemoryChannel>> {
        let client = self.client()?;
        let channel = Arc::new(MemoryChannel {
            id: client.next_id(),
            kind,
            name: Some(name.to_string()),
            topic: topic.map(str::to_string),
            guild: Arc::downgrade(self),
            client: Arc::downgrade(&client),
            messages: RwLock::new(Vec::new()),
            deleted: AtomicBool::new(false),
        });
        write(&self.channels).push(Arc::clone(&channel));
        Ok(channel)
    }

    pub fn create_role(&self, name: &str, permissions: u64) -> MemoryResult<Arc<MemoryRole>> {
        let client = self.client()?;
        let role = Arc::new(MemoryRole {
            id: client.next_id(),
            name: name.to_string(),
            permissions,
        });
        write(&self.roles).push(Arc::clone(&role));
        Ok(role)
    }

    pub fn add_member(&self, user: Arc<MemoryUser>) {
        let mut members = write(&self.members);
        if !members.iter().any(|m| m.id == user.id) {
            members.push(user);
        }
    }

    pub fn channels(&self) -> Vec<Arc<MemoryChannel>> {
        read(&self.channels).clone()
    }

    pub fn roles(&self) -> Vec<Arc<MemoryRole>> {
        read(&self.roles).clone()
    }

    pub fn members(&self) -> Vec<Arc<MemoryUser>> {
        read(&self.members).clone()
    }

    pub fn commands(&self) -> MemoryResult<Vec<Arc<MemoryCommand>>> {
        self.client()?;
        Ok(read(&self.commands).clone())
    }

    /// Replaces every guild command.
    pub fn overwrite_commands(
        &self,
        specs: Vec<MemoryCommandSpec>,
    ) -> MemoryResult<Vec<Arc<MemoryCommand>>> {
        let client = self.client()?;
        let commands = client.register(specs, Some(self.id))?;
        *write(&self.commands) = commands.clone();
        Ok(commands)
    }
}

// ================================================================
// Interactions
// ================================================================

/// A value a user entered for an option.
#[derive(Debug, Clone)]
pub enum MemoryOptionValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    User(Arc<MemoryUser>),
    Channel(Arc<MemoryChannel>),
    Role(Arc<MemoryRole>),
}

#[derive(Debug, Clone)]
pub struct MemoryInteractionOption {
    pub name: String,
    pub kind: MemoryOptionKind,
    pub value: Option<MemoryOptionValue>,
    /// The option the user is typing in, during autocomplete.
    pub focused: bool,
    pub options: Vec<Arc<MemoryInteractionOption>>,
}

impl MemoryInteractionOption {
    pub fn new(name: &str, kind: MemoryOptionKind, value: MemoryOptionValue) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: Some(value),
            focused: false,
            options: Vec::new(),
        }
    }

    /// A subcommand or group wrapping `options`.
    pub fn subcommand(name: &str, kind: MemoryOptionKind, options: Vec<Self>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: None,
            focused: false,
            options: options.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }
}

/// Where an interaction's initial response stands.
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryResponse {
    Pending,
    Deferred { flags: u32 },
    Sent(MemoryMessage),
}

#[derive(Debug)]
pub struct MemoryInteraction {
    pub id: u64,
    pub application_id: u64,
    pub command: Arc<MemoryCommand>,
    pub user: Arc<MemoryUser>,
    pub guild: Option<Arc<MemoryGuild>>,
    pub channel: Option<Arc<MemoryChannel>>,
    pub options: Vec<Arc<MemoryInteractionOption>>,
    pub autocomplete: bool,
    client: Weak<MemoryClient>,
    response: RwLock<MemoryResponse>,
    followups: RwLock<Vec<MemoryMessage>>,
    suggestions: RwLock<Option<Vec<(String, MemoryChoice)>>>,
}

impl MemoryInteraction {
    fn client(&self) -> MemoryResult<Arc<MemoryClient>> {
        let client = self.client.upgrade().ok_or(MemoryError::SessionClosed)?;
        client.ensure_open()?;
        Ok(client)
    }

    fn ensure_invoked(&self) -> MemoryResult<()> {
        if self.autocomplete {
            return Err(MemoryError::WrongInteractionKind(self.id));
        }
        Ok(())
    }

    pub fn response(&self) -> MemoryResponse {
        read(&self.response).clone()
    }

    pub fn followups(&self) -> Vec<MemoryMessage> {
        read(&self.followups).clone()
    }

    pub fn suggestions(&self) -> Option<Vec<(String, MemoryChoice)>> {
        read(&self.suggestions).clone()
    }

    pub fn respond(&self, content: &str, flags: u32) -> MemoryResult<()> {
        let client = self.client()?;
        self.ensure_invoked()?;
        let mut response = write(&self.response);
        if *response != MemoryResponse::Pending {
            return Err(MemoryError::AlreadyResponded(self.id));
        }
        *response = MemoryResponse::Sent(MemoryMessage {
            id: client.next_id(),
            content: content.to_string(),
            flags,
        });
        Ok(())
    }

    /// Acknowledges without content. Only the flags are fixed now.
    pub fn defer(&self, flags: u32) -> MemoryResult<()> {
        self.client()?;
        self.ensure_invoked()?;
        let mut response = write(&self.response);
        if *response != MemoryResponse::Pending {
            return Err(MemoryError::AlreadyResponded(self.id));
        }
        *response = MemoryResponse::Deferred { flags };
        Ok(())
    }

    /// Fills in a deferred response or rewrites a sent one. Flags set when
    /// deferring are kept.
    pub fn edit_response(&self, content: &str, flags: u32) -> MemoryResult<()> {
        let client = self.client()?;
        let mut response = write(&self.response);
        let next = match &*response {
            MemoryResponse::Pending => return Err(MemoryError::NotResponded(self.id)),
            MemoryResponse::Deferred { flags: deferred } => MemoryMessage {
                id: client.next_id(),
                content: content.to_string(),
                flags: deferred | flags,
            },
            MemoryResponse::Sent(message) => MemoryMessage {
                id: message.id,
                content: content.to_string(),
                flags,
            },
        };
        *response = MemoryResponse::Sent(next);
        Ok(())
    }

    pub fn followup(&self, content: &str, flags: u32) -> MemoryResult<u64> {
        let client = self.client()?;
        if !matches!(*read(&self.response), MemoryResponse::Sent(_)) {
            return Err(MemoryError::NotResponded(self.id));
        }
        let id = client.next_id();
        write(&self.followups).push(MemoryMessage {
            id,
            content: content.to_string(),
            flags,
        });
        Ok(id)
    }

    pub fn edit_followup(&self, message_id: u64, content: &str, flags: u32) -> MemoryResult<()> {
        self.client()?;
        let mut followups = write(&self.followups);
        let message = followups
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(MemoryError::UnknownMessage(message_id))?;
        message.content = content.to_string();
        message.flags = flags;
        Ok(())
    }

    /// Answers an autocomplete interaction. Only once.
    pub fn suggest(&self, choices: Vec<(String, MemoryChoice)>) -> MemoryResult<()> {
        self.client()?;
        if !self.autocomplete {
            return Err(MemoryError::WrongInteractionKind(self.id));
        }
        let mut suggestions = write(&self.suggestions);
        if suggestions.is_some() {
            return Err(MemoryError::AlreadyResponded(self.id));
        }
        *suggestions = Some(choices);
        Ok(())
    }
}

/// A logged-in bot session.
#[derive(Debug)]
pub struct MemoryClient {
    next_id: AtomicU64,
    bot: Arc<MemoryUser>,
    guilds: RwLock<Vec<Arc<MemoryGuild>>>,
    dms: RwLock<Vec<Arc<MemoryChannel>>>,
    global_commands: RwLock<Vec<Arc<MemoryCommand>>>,
    closed: AtomicBool,
}

impl MemoryClient {
    pub fn login(bot_name: &str) -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicU64::new(ID_BASE + 1),
            bot: Arc::new(MemoryUser {
                id: ID_BASE,
                name: bot_name.to_string(),
                bot: true,
            }),
            guilds: RwLock::new(Vec::new()),
            dms: RwLock::new(Vec::new()),
            global_commands: RwLock::new(Vec::new()),
            closed: AtomicBool::new(false),
        })
    }

    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn bot(&self) -> &Arc<MemoryUser> {
        &self.bot
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> MemoryResult<()> {
        if self.is_closed() {
            return Err(MemoryError::SessionClosed);
        }
        Ok(())
    }

    pub fn create_user(&self, name: &str, bot: bool) -> Arc<MemoryUser> {
        Arc::new(MemoryUser {
            id: self.next_id(),
            name: name.to_string(),
            bot,
        })
    }

    /// Creates a guild with the bot as its only member.
    pub fn create_guild(self: &Arc<Self>, name: &str) -> MemoryResult<Arc<MemoryGuild>> {
        self.ensure_open()?;
        let guild = Arc::new(MemoryGuild {
            id: self.next_id(),
            name: name.to_string(),
            client: Arc::downgrade(self),
            channels: RwLock::new(Vec::new()),
            roles: RwLock::new(Vec::new()),
            members: RwLock::new(vec![Arc::clone(&self.bot)]),
            commands: RwLock::new(Vec::new()),
        });
        write(&self.guilds).push(Arc::clone(&guild));
        Ok(guild)
    }

    /// Opens a DM channel, or a channel of an arbitrary `kind` outside any
    /// guild.
    pub fn open_channel(self: &Arc<Self>, kind: MemoryChannelKind) -> MemoryResult<Arc<MemoryChannel>> {
        self.ensure_open()?;
        let channel = Arc::new(MemoryChannel {
            id: self.next_id(),
            kind,
            name: None,
            topic: None,
            guild: Weak::new(),
            client: Arc::downgrade(self),
            messages: RwLock::new(Vec::new()),
            deleted: AtomicBool::new(false),
        });
        write(&self.dms).push(Arc::clone(&channel));
        Ok(channel)
    }

    pub fn guilds(&self) -> MemoryResult<Vec<Arc<MemoryGuild>>> {
        self.ensure_open()?;
        Ok(read(&self.guilds).clone())
    }

    pub fn guild(&self, id: u64) -> MemoryResult<Arc<MemoryGuild>> {
        self.guilds()?
            .into_iter()
            .find(|g| g.id == id)
            .ok_or(MemoryError::UnknownGuild(id))
    }

    pub fn global_commands(&self) -> MemoryResult<Vec<Arc<MemoryCommand>>> {
        self.ensure_open()?;
        Ok(read(&self.global_commands).clone())
    }

    /// Replaces every global command.
    pub fn overwrite_global_commands(
        &self,
        specs: Vec<MemoryCommandSpec>,
    ) -> MemoryResult<Vec<Arc<MemoryCommand>>> {
        self.ensure_open()?;
        let commands = self.register(specs, None)?;
        *write(&self.global_commands) = commands.clone();
        Ok(commands)
    }

    /// Simulates `user` invoking `command` in `channel`.
    pub fn invoke(
        self: &Arc<Self>,
        command: &Arc<MemoryCommand>,
        user: Arc<MemoryUser>,
        channel: Option<Arc<MemoryChannel>>,
        options: Vec<MemoryInteractionOption>,
    ) -> MemoryResult<Arc<MemoryInteraction>> {
        self.interact(command, user, channel, options, false)
    }

    /// Simulates `user` typing in the focused option of `command`.
    pub fn autocomplete(
        self: &Arc<Self>,
        command: &Arc<MemoryCommand>,
        user: Arc<MemoryUser>,
        channel: Option<Arc<MemoryChannel>>,
        options: Vec<MemoryInteractionOption>,
    ) -> MemoryResult<Arc<MemoryInteraction>> {
        self.interact(command, user, channel, options, true)
    }

    fn interact(
        self: &Arc<Self>,
        command: &Arc<MemoryCommand>,
        user: Arc<MemoryUser>,
        channel: Option<Arc<MemoryChannel>>,
        options: Vec<MemoryInteractionOption>,
        autocomplete: bool,
    ) -> MemoryResult<Arc<MemoryInteraction>> {
        self.ensure_open()?;
        let guild = match command.guild_id {
            Some(id) => Some(self.guild(id)?),
            None => channel.as_ref().and_then(|c| c.guild()),
        };
        Ok(Arc::new(MemoryInteraction {
            id: self.next_id(),
            application_id: self.bot.id,
            command: Arc::clone(command),
            user,
            guild,
            channel,
            options: options.into_iter().map(Arc::new).collect(),
            autocomplete,
            client: Arc::downgrade(self),
            response: RwLock::new(MemoryResponse::Pending),
            followups: RwLock::new(Vec::new()),
            suggestions: RwLock::new(None),
        }))
    }

    fn register(
        &self,
        specs: Vec<MemoryCommandSpec>,
        guild_id: Option<u64>,
    ) -> MemoryResult<Vec<Arc<MemoryCommand>>> {
        let mut seen = std::collections::HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(MemoryError::DuplicateCommand(spec.name.clone()));
            }
        }
        Ok(specs
            .into_iter()
            .map(|spec| {
                Arc::new(MemoryCommand {
                    id: self.next_id(),
                    guild_id,
                    spec,
                })
            })
            .collect())
    }
}
