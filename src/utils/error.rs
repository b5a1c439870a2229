use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Source file not found: {path}")]
    SourceNotFoundError { path: String },

    #[error("Malformed race export: {message}")]
    MalformedExportError { message: String },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Format,
    Destination,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BridgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::SourceNotFoundError { .. } => ErrorCategory::Source,
            BridgeError::MalformedExportError { .. } => ErrorCategory::Format,
            BridgeError::WriteError { .. } | BridgeError::CsvError(_) => ErrorCategory::Destination,
            BridgeError::InvalidConfigValueError { .. }
            | BridgeError::ConfigValidationError { .. } => ErrorCategory::Config,
            BridgeError::IoError(_) => ErrorCategory::System,
        }
    }

    // 嚴重程度對應 CLI 退出碼,調整前先看 main.rs
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BridgeError::SourceNotFoundError { .. } => ErrorSeverity::Medium,
            BridgeError::MalformedExportError { .. } => ErrorSeverity::High,
            BridgeError::InvalidConfigValueError { .. }
            | BridgeError::ConfigValidationError { .. } => ErrorSeverity::High,
            BridgeError::WriteError { .. } | BridgeError::CsvError(_) | BridgeError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BridgeError::SourceNotFoundError { path } => {
                format!("Race export not found: {}", path)
            }
            BridgeError::MalformedExportError { message } => {
                format!("The race export is not valid JSON: {}", message)
            }
            BridgeError::WriteError { path, .. } => {
                format!("Could not write the competitor list to {}", path)
            }
            BridgeError::CsvError(e) => format!("CSV output failed: {}", e),
            BridgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            BridgeError::ConfigValidationError { field, message } => {
                format!("Config file problem ({}): {}", field, message)
            }
            BridgeError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BridgeError::SourceNotFoundError { .. } => {
                "Check the export path, or pass --source with the JSON file Sailwave produced"
                    .to_string()
            }
            BridgeError::MalformedExportError { .. } => {
                "Re-export the race from Sailwave; the JSON file looks truncated or hand-edited"
                    .to_string()
            }
            BridgeError::WriteError { .. } | BridgeError::CsvError(_) => {
                "Check the output directory exists and is writable".to_string()
            }
            BridgeError::InvalidConfigValueError { .. }
            | BridgeError::ConfigValidationError { .. } => {
                "Fix the flagged setting and run again".to_string()
            }
            BridgeError::IoError(_) => "Check disk space and file permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
