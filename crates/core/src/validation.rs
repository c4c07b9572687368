//! Input validation for user fields.
//!
//! Incoming values are trimmed of leading and trailing whitespace before they are checked, and
//! the trimmed values are what ends up in the store.

use crate::user::UserFields;
use crate::{UserError, UserResult};

/// Outcome of [`normalise_user_fields`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalisedFields {
    /// The trimmed values.
    pub fields: UserFields,
    /// True only if every trimmed value is non-empty.
    pub is_valid: bool,
}

/// Trims the three user fields and reports whether all of them are non-empty.
///
/// Pure; never fails.
pub fn normalise_user_fields(
    first_name: &str,
    last_name: &str,
    biography: &str,
) -> NormalisedFields {
    let fields = UserFields {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        biography: biography.trim().to_string(),
    };
    let is_valid = !fields.first_name.is_empty()
        && !fields.last_name.is_empty()
        && !fields.biography.is_empty();

    NormalisedFields { fields, is_valid }
}

/// Trims the three user fields, requiring each to be non-empty afterwards.
///
/// # Errors
///
/// Returns [`UserError::MissingRequiredFields`] if any field is empty or whitespace-only.
pub fn validate_user_fields(
    first_name: &str,
    last_name: &str,
    biography: &str,
) -> UserResult<UserFields> {
    let normalised = normalise_user_fields(first_name, last_name, biography);
    if !normalised.is_valid {
        return Err(UserError::MissingRequiredFields);
    }
    Ok(normalised.fields)
}
