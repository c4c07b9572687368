//! User record model.

use api_shared::UserRes;
use serde::{Deserialize, Serialize};
use users_uuid::UserId;

/// The caller-controlled part of a user record.
///
/// Has no identifier field: the store alone decides which `id` a record is kept under, so a
/// value of this type can be handed to [`crate::UserStore::insert`] or
/// [`crate::UserStore::update`] without any risk of a caller-chosen id leaking in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// A stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl User {
    /// Builds the record kept under `id` from caller-supplied fields.
    pub fn from_fields(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            biography: fields.biography,
        }
    }
}

impl From<User> for UserRes {
    fn from(user: User) -> Self {
        UserRes {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            biography: user.biography,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_res_carries_hyphenated_id() {
        let id = UserId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let user = User::from_fields(
            id,
            UserFields {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                biography: "Mathematician".into(),
            },
        );

        let res = UserRes::from(user);

        assert_eq!(res.id, "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(res.first_name, "Ada");
        assert_eq!(res.last_name, "Lovelace");
        assert_eq!(res.biography, "Mathematician");
    }

    #[test]
    fn test_user_serializes_with_flat_fields() {
        let id = UserId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let user = User::from_fields(
            id,
            UserFields {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                biography: "Mathematician".into(),
            },
        );

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "biography": "Mathematician",
            })
        );
    }
}
