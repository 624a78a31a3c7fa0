use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Layout expanded to no entries")]
    EmptyLayout,

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { name, reason } => vec![
                format!("App name '{}' is invalid: {}", name, reason),
                "Use a plain directory name, e.g. blog or shop_api".into(),
            ],
            Self::EmptyLayout | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec![
                    "The built-in layout failed its own consistency check".into(),
                    "This is a bug, please report it".into(),
                ]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_is_a_validation_error() {
        let err = DomainError::InvalidAppName {
            name: "a/b".into(),
            reason: "contains path separators".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("a/b")));
    }

    #[test]
    fn layout_errors_are_internal() {
        assert_eq!(DomainError::EmptyLayout.category(), ErrorCategory::Internal);
        assert_eq!(
            DomainError::DuplicatePath { path: "x".into() }.category(),
            ErrorCategory::Internal
        );
    }
}
