/// Error type for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// A required field is empty once trimmed.
    #[error("missing required fields: first_name, last_name, and biography")]
    MissingRequiredFields,
    /// A writer panicked while holding the store lock; the map can no longer be trusted.
    #[error("user store lock poisoned during {operation}")]
    StorePoisoned { operation: &'static str },
}

/// Result type for user operations.
pub type UserResult<T> = std::result::Result<T, UserError>;
