use crate::protocol::SessionEvent;
use std::str::FromStr;
use thiserror::Error;

pub const BUFFER_ORDER_VAR: &str = "TOOLPANEL_BUFFER_ORDER";
pub const LOG_LEVEL_VAR: &str = "TOOLPANEL_LOG_LEVEL";

/// Ordering contract with the transport for the delivered event buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BufferOrder {
    /// Newest event at index 0, session creation at the tail
    #[default]
    NewestFirst,
    /// Session creation at index 0, newest event at the tail
    OldestFirst,
}

impl BufferOrder {
    /// Chronologically first event
    pub fn oldest<'a>(&self, events: &'a [SessionEvent]) -> Option<&'a SessionEvent> {
        match self {
            BufferOrder::NewestFirst => events.last(),
            BufferOrder::OldestFirst => events.first(),
        }
    }

    /// Most recent event
    pub fn newest<'a>(&self, events: &'a [SessionEvent]) -> Option<&'a SessionEvent> {
        match self {
            BufferOrder::NewestFirst => events.first(),
            BufferOrder::OldestFirst => events.last(),
        }
    }

    /// Add a freshly received event to a buffer kept in this order
    pub fn push(&self, events: &mut Vec<SessionEvent>, event: SessionEvent) {
        match self {
            BufferOrder::NewestFirst => events.insert(0, event),
            BufferOrder::OldestFirst => events.push(event),
        }
    }
}

impl FromStr for BufferOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest-first" | "newest_first" => Ok(BufferOrder::NewestFirst),
            "oldest-first" | "oldest_first" => Ok(BufferOrder::OldestFirst),
            other => Err(ConfigError::Invalid {
                var: BUFFER_ORDER_VAR,
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub buffer_order: BufferOrder,
    pub log_level: tracing::Level,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            buffer_order: BufferOrder::default(),
            log_level: tracing::Level::WARN,
        }
    }
}

impl PanelConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(order) = lookup(BUFFER_ORDER_VAR) {
            config.buffer_order = order.parse()?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level.trim().parse().map_err(|_| ConfigError::Invalid {
                var: LOG_LEVEL_VAR,
                value: level.clone(),
            })?;
        }

        Ok(config)
    }
}
