//! JSON request and response bodies.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body accepted by `POST /api/users` and `PUT /api/users/{id}`.
///
/// Missing and `null` fields decode as empty strings so that they are reported by validation
/// rather than as malformed JSON. Unknown fields, including any `id`, are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserReq {
    #[schema(example = "Ada")]
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[schema(example = "Mathematician")]
    #[serde(deserialize_with = "null_as_empty")]
    pub biography: String,
}

impl UserReq {
    /// Decodes a request body.
    ///
    /// The body must be a JSON object or `null` (which decodes as all-empty fields). Object keys
    /// are matched case-insensitively, so `First_Name` fills `first_name`; when several keys fold
    /// to the same field, the last one in key order wins.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` for malformed JSON, for any top-level value other than an
    /// object or `null`, and for fields that are not strings.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let folded: Map<String, Value> = map
                    .into_iter()
                    .map(|(key, value)| (key.to_lowercase(), value))
                    .collect();
                serde_json::from_value(Value::Object(folded))
            }
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A stored user as returned by every successful user endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRes {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// Body of every error response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    #[schema(example = "User not found")]
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_req_missing_fields_default_to_empty() {
        let req: UserReq = serde_json::from_str(r#"{"first_name":"Ada"}"#).unwrap();

        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "");
        assert_eq!(req.biography, "");
    }

    #[test]
    fn test_user_req_ignores_unknown_fields() {
        let req: UserReq = serde_json::from_str(
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000","first_name":"Ada","last_name":"L","biography":"B","extra":1}"#,
        )
        .unwrap();

        assert_eq!(req.first_name, "Ada");
    }

    #[test]
    fn test_user_req_rejects_wrong_types() {
        assert!(UserReq::from_json_slice(br#"{"first_name":42}"#).is_err());
    }

    #[test]
    fn test_from_json_slice_rejects_non_objects() {
        let bodies: [&[u8]; 6] = [
            br#"["Ada","Lovelace","x"]"#,
            b"\"Ada\"",
            b"42",
            b"true",
            b"",
            b"{",
        ];

        for body in bodies {
            assert!(
                UserReq::from_json_slice(body).is_err(),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_from_json_slice_null_body_is_all_empty() {
        assert_eq!(UserReq::from_json_slice(b"null").unwrap(), UserReq::default());
    }

    #[test]
    fn test_from_json_slice_null_fields_are_empty() {
        let req = UserReq::from_json_slice(
            br#"{"first_name":null,"last_name":"Lovelace","biography":"Mathematician"}"#,
        )
        .unwrap();

        assert_eq!(req.first_name, "");
        assert_eq!(req.last_name, "Lovelace");
        assert_eq!(req.biography, "Mathematician");
    }

    #[test]
    fn test_from_json_slice_matches_keys_case_insensitively() {
        let req = UserReq::from_json_slice(
            br#"{"First_Name":"Ada","LAST_NAME":"Lovelace","Biography":"Mathematician"}"#,
        )
        .unwrap();

        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "Lovelace");
        assert_eq!(req.biography, "Mathematician");
    }

    #[test]
    fn test_error_res_shape() {
        let json = serde_json::to_string(&ErrorRes::new("User not found")).unwrap();

        assert_eq!(json, r#"{"error":"User not found"}"#);
    }
}
