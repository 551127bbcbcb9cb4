use crate::input::command_log::CommandLog;
use crate::model::section::Section;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Longest delay accepted anywhere in the boot script.
const MAX_DELAY_MS: u64 = 60_000;

/// Shortest cursor blink period that still reads as blinking.
const MIN_BLINK_MS: u64 = 50;

/// The boot script always ends with exactly this many welcome lines.
pub const WELCOME_LINES: usize = 3;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub boot: BootConfig,

    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// Terminal overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TerminalConfig {
    /// Label shown in the terminal header
    #[serde(default = "default_title")]
    pub title: String,

    /// Whether to draw the header bar (title, status, version badge)
    #[serde(default = "default_true")]
    pub show_header: bool,

    /// Prompt marker echoed before every submitted command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Lines present in the transcript before the boot sequence starts
    #[serde(default = "default_initial_transcript")]
    pub initial_transcript: Vec<String>,

    /// Maximum number of commands kept for up/down recall
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Cursor blink half-period in milliseconds
    #[serde(default = "default_cursor_blink_ms")]
    pub cursor_blink_ms: u64,
}

fn default_title() -> String {
    "terminal@gefferson ~".to_string()
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "$".to_string()
}

fn default_initial_transcript() -> Vec<String> {
    vec![
        "Welcome to Gefferson Souza's portfolio!".to_string(),
        "Type 'help' to see the available commands".to_string(),
        "Try 'goto projects' to navigate the site".to_string(),
    ]
}

fn default_history_limit() -> usize {
    CommandLog::DEFAULT_MAX_ENTRIES
}

fn default_cursor_blink_ms() -> u64 {
    530
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_header: true,
            prompt: default_prompt(),
            initial_transcript: default_initial_transcript(),
            history_limit: default_history_limit(),
            cursor_blink_ms: default_cursor_blink_ms(),
        }
    }
}

/// One scripted line of the boot sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BootMessage {
    pub message: String,

    /// Delay before this line appears, measured from the previous line
    pub delay_ms: u64,
}

impl BootMessage {
    pub fn new(message: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            message: message.into(),
            delay_ms,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Boot sequence script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BootConfig {
    /// Pause before the first scripted delay starts counting
    #[serde(default = "default_lead_in_ms")]
    pub lead_in_ms: u64,

    /// System messages, in order
    #[serde(default = "default_boot_messages")]
    pub messages: Vec<BootMessage>,

    /// Welcome lines appended after the system messages, exactly three
    #[serde(default = "default_welcome_messages")]
    pub welcome: Vec<BootMessage>,
}

fn default_lead_in_ms() -> u64 {
    300
}

fn default_boot_messages() -> Vec<BootMessage> {
    vec![
        BootMessage::new("Starting terminal system v2.0.25...", 600),
        BootMessage::new("Loading interface modules...", 800),
        BootMessage::new("Verifying access credentials...", 700),
        BootMessage::new("Connecting to portfolio server...", 900),
        BootMessage::new("Loading user preferences...", 600),
        BootMessage::new("Terminal system ready!", 500),
    ]
}

fn default_welcome_messages() -> Vec<BootMessage> {
    vec![
        BootMessage::new("Welcome to the interactive portfolio of Gefferson Souza!", 500),
        BootMessage::new("Use commands to navigate the system.", 300),
        BootMessage::new("Type 'help' to see the available commands.", 200),
    ]
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: default_lead_in_ms(),
            messages: default_boot_messages(),
            welcome: default_welcome_messages(),
        }
    }
}

impl BootConfig {
    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }
}

/// Host page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PortfolioConfig {
    /// Section shown at startup (hero, about, stack, projects, lab, contact)
    #[serde(default = "default_start_section")]
    pub start_section: String,

    /// Open the terminal overlay automatically after this many milliseconds.
    /// `null` keeps it closed until toggled.
    #[serde(default = "default_auto_open_terminal_ms")]
    pub auto_open_terminal_ms: Option<u64>,

    /// Name shown in the page header
    #[serde(default = "default_owner")]
    pub owner: String,
}

fn default_start_section() -> String {
    "hero".to_string()
}

fn default_auto_open_terminal_ms() -> Option<u64> {
    Some(2000)
}

fn default_owner() -> String {
    "Gefferson T. Souza".to_string()
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            start_section: default_start_section(),
            auto_open_terminal_ms: default_auto_open_terminal_ms(),
            owner: default_owner(),
        }
    }
}

impl PortfolioConfig {
    /// The configured start section, falling back to hero.
    pub fn start_section(&self) -> Section {
        Section::from_id(&self.start_section).unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;

        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.history_limit == 0 {
            return Err(ConfigError::ValidationError(
                "terminal.history_limit must be greater than 0".to_string(),
            ));
        }

        if self.terminal.cursor_blink_ms < MIN_BLINK_MS {
            return Err(ConfigError::ValidationError(format!(
                "terminal.cursor_blink_ms must be at least {MIN_BLINK_MS}"
            )));
        }

        if self.boot.lead_in_ms > MAX_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "boot.lead_in_ms must be <= {MAX_DELAY_MS}"
            )));
        }

        if self.boot.welcome.len() != WELCOME_LINES {
            return Err(ConfigError::ValidationError(format!(
                "boot.welcome must have exactly {WELCOME_LINES} lines, found {}",
                self.boot.welcome.len()
            )));
        }

        let scripted = self
            .boot
            .messages
            .iter()
            .map(|m| ("boot.messages", m))
            .chain(self.boot.welcome.iter().map(|m| ("boot.welcome", m)));
        for (field, message) in scripted {
            if message.delay_ms > MAX_DELAY_MS {
                return Err(ConfigError::ValidationError(format!(
                    "{field}: delay for '{}' must be <= {MAX_DELAY_MS}",
                    message.message
                )));
            }
        }

        if Section::from_id(&self.portfolio.start_section).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "portfolio.start_section '{}' is not a known section",
                self.portfolio.start_section
            )));
        }

        if let Some(ms) = self.portfolio.auto_open_terminal_ms {
            if ms > MAX_DELAY_MS {
                return Err(ConfigError::ValidationError(format!(
                    "portfolio.auto_open_terminal_ms must be <= {MAX_DELAY_MS}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
