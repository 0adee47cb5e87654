//! System integration command module
//!
//! Forwards frontend log lines into the host's logger.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::LogRequest;

/// Log a message from the frontend
pub fn log_message(request: LogRequest) -> AppResult<()> {
    let level = match request.level.to_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "info" => log::Level::Info,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        other => {
            return Err(AppError::Validation(format!("Unknown log level: {}", other)));
        }
    };

    log::log!(target: "frontend", level, "{}", request.message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        for level in ["error", "WARN", "info", "debug", "trace"] {
            let request = LogRequest {
                level: level.to_string(),
                message: "unit select changed".to_string(),
            };
            assert!(log_message(request).is_ok());
        }
    }

    #[test]
    fn test_unknown_level() {
        let request = LogRequest {
            level: "loud".to_string(),
            message: "hi".to_string(),
        };
        assert!(log_message(request).is_err());
    }
}
