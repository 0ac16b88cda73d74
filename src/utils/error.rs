use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{message}")]
    DocumentError { message: String },

    #[error("unparseable date `{value}`: {reason} (expected DD.MM.YY HH:MM)")]
    DateParseError { value: String, reason: String },

    #[error("ticket #{index}: field `{field}` {reason}")]
    DataFieldError {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("{message}")]
    ConfigError { message: String },

    #[error("invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TicketError {
    /// Short label printed in front of the message on stderr.
    pub fn category(&self) -> &'static str {
        match self {
            TicketError::IoError(_) => "I/O error",
            TicketError::JsonError(_) | TicketError::DocumentError { .. } => "JSON error",
            TicketError::DateParseError { .. } => "Date error",
            TicketError::DataFieldError { .. } => "Data field error",
            TicketError::ConfigError { .. } | TicketError::InvalidConfigValueError { .. } => {
                "Configuration error"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        format!("{}: {}", self.category(), self)
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
