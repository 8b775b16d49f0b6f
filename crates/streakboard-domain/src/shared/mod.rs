use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
    (generated $name:ident) => {
        define_id!($name);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// User ids come from the fixed roster ("1", "2"), never generated.
define_id!(UserId);
define_id!(generated ProblemId);
define_id!(generated SkipId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    UserNotFound = 2001,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataUnavailable = 4002,
    DataIntegrityError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    ConfigurationError = 5002,

    // Validation (6xxx)
    ValidationError = 6001,
    MissingRequiredField = 6003,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::UserNotFound
            | ErrorCode::ValidationError
            | ErrorCode::MissingRequiredField => ErrorSeverity::Info,

            ErrorCode::DataUnavailable | ErrorCode::RepositoryError => ErrorSeverity::Warning,

            ErrorCode::DataIntegrityError
            | ErrorCode::InfrastructureError
            | ErrorCode::ConfigurationError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::DataUnavailable | ErrorCode::RepositoryError
        )
    }

    /// Whether the caller (rather than the server) is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::UserNotFound | ErrorCode::ValidationError | ErrorCode::MissingRequiredField
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::DataUnavailable(_) => ErrorCode::DataUnavailable,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Configuration(_) => ErrorCode::ConfigurationError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::MissingField(_) => ErrorCode::MissingRequiredField,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::UserNotFound(msg)
            | DomainError::Repository(msg)
            | DomainError::DataUnavailable(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Configuration(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::MissingField(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ProblemId::new();
        let b = ProblemId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_user_id_round_trips_string() {
        let id = UserId::from_string("2");
        assert_eq!(id.as_str(), "2");
        assert_eq!(id.to_string(), "2");
    }

    #[test]
    fn test_error_codes_and_severity() {
        let err = DomainError::DataUnavailable("db offline".to_string());
        assert_eq!(err.code().code(), 4002);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(err.is_recoverable());
        assert_eq!(err.message(), "db offline");
        assert_eq!(err.format_with_code(), "[4002] Data unavailable: db offline");
    }

    #[test]
    fn test_severity_by_error_kind() {
        assert_eq!(DomainError::Validation("x".into()).severity(), ErrorSeverity::Info);
        assert_eq!(DomainError::UserNotFound("9".into()).severity(), ErrorSeverity::Info);
        assert_eq!(DomainError::Repository("x".into()).severity(), ErrorSeverity::Warning);
        assert_eq!(DomainError::DataIntegrity("x".into()).severity(), ErrorSeverity::Error);
        assert_eq!(DomainError::Configuration("x".into()).severity(), ErrorSeverity::Error);
        assert!(!DomainError::Validation("x".into()).is_recoverable());
    }

    #[test]
    fn test_client_errors() {
        assert!(DomainError::MissingField("userId".into()).code().is_client_error());
        assert!(DomainError::UserNotFound("9".into()).code().is_client_error());
        assert!(!DomainError::Repository("x".into()).code().is_client_error());
    }
}
