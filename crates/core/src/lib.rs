//! # Users Core
//!
//! Core logic for the Users API.
//!
//! This crate contains pure data operations over the in-memory user collection:
//! - The user record model (`user`)
//! - Trimming and required-field checks on incoming values (`validation`)
//! - The shared, lock-guarded record store (`store`)
//!
//! **No API concerns**: HTTP routing, status codes and response bodies belong in `api-rest` or
//! `api-shared`.

pub mod error;
pub mod store;
pub mod user;
pub mod validation;

pub use error::{UserError, UserResult};
pub use store::UserStore;
pub use user::{User, UserFields};
pub use users_uuid::UserId;
pub use validation::{normalise_user_fields, validate_user_fields, NormalisedFields};
