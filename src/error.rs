use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse message file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Screen clear error: {0}")]
    ScreenClear(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Animation task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a screen clear error with context
    pub fn screen_clear_error(msg: impl Into<String>) -> Self {
        Self::ScreenClear(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error was raised before the animation started (bad set name,
    /// unreadable or invalid message file)
    #[allow(dead_code)] // Reached through the library crate only
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::ConfigParse(_) | AppError::LogSetup(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("no set named \"demo\"");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: no set named \"demo\""
        );
    }

    #[test]
    fn test_screen_clear_error_helper() {
        let error = AppError::screen_clear_error("terminal does not support clearing");
        assert!(matches!(error, AppError::ScreenClear(_)));
        assert_eq!(
            error.to_string(),
            "Screen clear error: terminal does not support clearing"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ConfigParse(_)));
        assert!(app_error.to_string().starts_with("Failed to parse message file:"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_is_startup_error() {
        assert!(AppError::config_error("bad set").is_startup_error());
        assert!(AppError::log_setup_error("no log dir").is_startup_error());

        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(!AppError::Io(io_error).is_startup_error());
        assert!(!AppError::screen_clear_error("clear failed").is_startup_error());
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::screen_clear_error("test clear error"),
            AppError::log_setup_error("test log error"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                !display_string.is_empty(),
                "Error display should not be empty: {error:?}"
            );
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
