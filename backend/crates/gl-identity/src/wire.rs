//! JSON shapes exchanged with the hosted identity and document services.

use crate::{IdentityError, ProfileFields};

use gl_core::FieldValue;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const PASSWORD_RESET_REQUEST_TYPE: &str = "PASSWORD_RESET";
pub const SERVER_REQUEST_TIME: &str = "REQUEST_TIME";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub local_id: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl ErrorBody {
    /// `"WEAK_PASSWORD : Password should be at least 6 characters"` yields
    /// `"WEAK_PASSWORD"`.
    pub fn code(&self) -> &str {
        self.message
            .split(" : ")
            .next()
            .unwrap_or_default()
            .trim()
    }

    #[track_caller]
    pub fn into_identity_error(self) -> IdentityError {
        let code = self.code().to_string();
        IdentityError::from_provider_code(&code, self.message)
    }
}

/// Build a single-write commit body for `document_name`.
///
/// Plain values go into `fields`; `ServerTimestamp` values become
/// `setToServerValue` transforms so the server clock is used.
pub fn commit_body(document_name: &str, fields: &ProfileFields) -> Value {
    let mut encoded = Map::new();
    let mut transforms = Vec::new();

    for (name, value) in fields {
        match value {
            FieldValue::String(s) => {
                encoded.insert(name.clone(), json!({ "stringValue": s }));
            }
            FieldValue::Bool(b) => {
                encoded.insert(name.clone(), json!({ "booleanValue": b }));
            }
            FieldValue::ServerTimestamp => {
                transforms.push(json!({
                    "fieldPath": name,
                    "setToServerValue": SERVER_REQUEST_TIME,
                }));
            }
        }
    }

    let mut write = json!({
        "update": {
            "name": document_name,
            "fields": Value::Object(encoded),
        }
    });
    if !transforms.is_empty() {
        write["updateTransforms"] = Value::Array(transforms);
    }

    json!({ "writes": [write] })
}
