//! User identifier utilities.
//!
//! Every user record is keyed by a random (version 4) UUID that the store assigns at creation
//! time. This crate provides the [`UserId`] wrapper used for that key, so the rest of the
//! workspace never handles bare `uuid::Uuid` values or unchecked strings.
//!
//! ## Textual forms
//! [`UserId::parse`] accepts every standard UUID spelling, case-insensitively:
//! - Hyphenated: `550e8400-e29b-41d4-a716-446655440000`
//! - Simple: `550e8400e29b41d4a716446655440000`
//! - Braced: `{550e8400-e29b-41d4-a716-446655440000}`
//! - URN: `urn:uuid:550e8400-e29b-41d4-a716-446655440000`
//!
//! Identifiers are always rendered in the lowercase hyphenated form.

mod user_id;

pub use user_id::{Uuid, UserId};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Input is not a syntactically valid UUID.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
