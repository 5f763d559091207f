use serde::{Deserialize, Serialize};

/// The request to log into the server.
///
/// Both fields are optional on the wire so the server can tell the caller
/// exactly which one is missing instead of rejecting the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// Email of the account to log into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Plaintext password for the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Req {
    /// Build a request with both credentials present.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Result of logging in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resp {
    /// Token to use for future requests.
    pub token: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/api/v1/login";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_decode_as_none() {
        let req: Req = serde_json::from_str(r#"{"password": "hunter2"}"#).unwrap();

        assert_eq!(
            req,
            Req {
                email: None,
                password: Some("hunter2".to_string()),
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: Req =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "x", "remember": true}"#)
                .unwrap();

        assert_eq!(req, Req::new("a@b.c", "x"));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let req = Req {
            email: Some("a@b.c".to_string()),
            password: None,
        };

        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"email":"a@b.c"}"#
        );
    }

    #[test]
    fn resp_uses_token_field() {
        let resp = Resp {
            token: "valid_token".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            serde_json::json!({ "token": "valid_token" })
        );
    }
}
