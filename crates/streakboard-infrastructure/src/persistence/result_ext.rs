use streakboard_domain::shared::DomainError;

/// Extension trait for mapping foreign errors into `DomainError`
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::DataUnavailable
    fn to_unavailable_err(self) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_unavailable_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::DataUnavailable(e.to_string()))
    }
}
