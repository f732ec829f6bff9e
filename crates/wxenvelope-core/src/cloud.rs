//! Cloud function envelope (JSON).
//!
//! A cloud function receives a `CloudRequest` and answers with a
//! `CloudResponse`. For push handling, `extraData` carries the pushed XML on
//! the way in and the encoded passive reply on the way out.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EnvelopeError;

/// Caller session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudSession {
    pub user_id: String,
    /// Invoked with master-key privileges.
    pub master: bool,
    pub roles: Vec<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudLog {
    pub created_at: String,
    pub content: String,
    pub flag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudRequest {
    /// Set only for single-resource operations.
    pub object_id: String,
    /// Values posted by the client (create / update).
    pub data: Map<String, Value>,
    /// Raw extra payload, e.g. the XML pushed by the platform.
    pub extra_data: String,
    pub session: CloudSession,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudResponse {
    pub successed: bool,
    /// Modified field values.
    pub data: Map<String, Value>,
    pub result: Value,
    /// Raw extra payload, e.g. an encoded passive reply.
    pub extra_data: String,
    /// Fields to hide from the client.
    pub hide: Vec<String>,
    /// Fields the client API may not modify.
    pub protect: Vec<String>,
    #[serde(rename = "error")]
    pub errors: CloudError,
    pub logs: Vec<CloudLog>,
}

impl CloudResponse {
    pub fn ok(result: Value) -> Self {
        Self {
            successed: true,
            result,
            ..Self::default()
        }
    }

    pub fn fail(code: i32, message: impl Into<String>) -> Self {
        Self {
            successed: false,
            errors: CloudError {
                code,
                message: message.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_extra_data(mut self, extra_data: impl Into<String>) -> Self {
        self.extra_data = extra_data.into();
        self
    }

    /// Append a log entry stamped with the current UTC time.
    pub fn log(&mut self, flag: impl Into<String>, content: impl Into<String>) {
        self.logs.push(CloudLog {
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            content: content.into(),
            flag: flag.into(),
        });
    }
}

impl From<&EnvelopeError> for CloudResponse {
    fn from(e: &EnvelopeError) -> Self {
        Self::fail(e.code().as_i32(), e.to_string())
    }
}
