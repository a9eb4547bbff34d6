//! Configuration module for msgboard.

use serde::Deserialize;
use std::path::Path;

use crate::board::{Board, NewBoard};
use crate::channel::Channel;
use crate::{MsgBoardError, Result};

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "MSGBOARD_LOG_LEVEL";

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional path to a log file, written alongside stdout.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// A board to create on startup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Board name.
    pub name: String,
    /// Password; present for private boards only.
    #[serde(default)]
    pub password: Option<String>,
    /// Allowed channels, registered as one batch.
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl BoardConfig {
    /// Create the board described by this entry.
    pub fn build(&self) -> Board {
        let new_board = match &self.password {
            Some(password) => NewBoard::private(&self.name, password),
            None => NewBoard::public(&self.name),
        };
        new_board.with_channels(&self.channels).build()
    }
}

fn default_boards() -> Vec<BoardConfig> {
    vec![
        BoardConfig {
            name: "Public Board".to_string(),
            password: None,
            channels: vec![Channel::Email, Channel::Sms, Channel::WhatsApp],
        },
        BoardConfig {
            name: "Private Board".to_string(),
            password: Some("Admin".to_string()),
            channels: vec![Channel::Email, Channel::WhatsApp],
        },
    ]
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Boards to create.
    #[serde(default = "default_boards")]
    pub boards: Vec<BoardConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            boards: default_boards(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MsgBoardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment variable overrides applied.
    pub fn default_with_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MsgBoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MSGBOARD_LOG_LEVEL`: Override the log level
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - A board has an empty name
    /// - A private board has an empty password
    pub fn validate(&self) -> Result<()> {
        for board in &self.boards {
            if board.name.trim().is_empty() {
                return Err(MsgBoardError::Config("board name is empty".to_string()));
            }
            if matches!(&board.password, Some(p) if p.is_empty()) {
                return Err(MsgBoardError::Config(format!(
                    "private board {} has an empty password",
                    board.name
                )));
            }
        }
        Ok(())
    }

    /// Find a board entry by name.
    pub fn board(&self, name: &str) -> Result<&BoardConfig> {
        self.boards
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| MsgBoardError::NotFound(format!("board {name}")))
    }
}
