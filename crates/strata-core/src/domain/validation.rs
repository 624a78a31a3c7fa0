use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// An app name must be usable as a single file-system path segment.
    ///
    /// Richer UX rules (leading dots, suggestions) belong to the CLI;
    /// the domain only rejects names that cannot name a directory.
    pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidAppName {
                name: name.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidAppName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        Ok(())
    }
}
