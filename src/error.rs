use std::io;

/// Errors surfaced by the gcovr action.
#[derive(Debug, thiserror::Error)]
pub enum GcovrError {
    #[error("gcovr not installed")]
    ToolNotFound,

    #[error("`{command}` failed with {}", .code.map_or_else(|| "termination by signal".to_string(), |c| format!("exit code {c}")))]
    ExecutionFailure { command: String, code: Option<i32> },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl GcovrError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        GcovrError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        GcovrError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GcovrError>;
