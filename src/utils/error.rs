use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers for all fields.";

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FootprintError {
    pub fn invalid_input() -> Self {
        FootprintError::InvalidInput {
            message: INVALID_INPUT_MESSAGE.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FootprintError::InvalidInput { .. } => ErrorCategory::Input,
            FootprintError::ConfigError { .. }
            | FootprintError::InvalidConfigValue { .. }
            | FootprintError::TomlError(_) => ErrorCategory::Configuration,
            FootprintError::CsvError(_) | FootprintError::SerializationError(_) => {
                ErrorCategory::Output
            }
            FootprintError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FootprintError::InvalidInput { message } => message.clone(),
            FootprintError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            FootprintError::ConfigError { message } => format!("Configuration problem: {}", message),
            FootprintError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            FootprintError::CsvError(_) => "Failed to write CSV output".to_string(),
            FootprintError::SerializationError(_) => "Failed to write JSON output".to_string(),
            FootprintError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FootprintError::InvalidInput { .. } => {
                "Provide a number for --energy, --fuel and --methane (e.g. --energy 10)"
            }
            FootprintError::InvalidConfigValue { .. } | FootprintError::ConfigError { .. } => {
                "Check the [factors] and [report] tables of the configuration file"
            }
            FootprintError::TomlError(_) => "Fix the TOML syntax and try again",
            FootprintError::CsvError(_) | FootprintError::SerializationError(_) => {
                "Try a different --format"
            }
            FootprintError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, FootprintError>;
