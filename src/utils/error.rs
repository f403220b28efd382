use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RewriteError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RewriteError::ConfigError { .. } | RewriteError::InvalidConfigValueError { .. } => 1,
            RewriteError::IoError(_) => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RewriteError::IoError(e) => format!("Could not read or write the header: {}", e),
            RewriteError::ConfigError { message } => format!("Invalid configuration: {}", message),
            RewriteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = RewriteError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(io.exit_code(), 2);

        let config = RewriteError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = RewriteError::InvalidConfigValueError {
            field: "input".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Invalid --input: Path cannot be empty");
    }
}
