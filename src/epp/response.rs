// Copyright 2026 The EPP Core Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Protocol outputs and result codes.
//!
//! The Response Builder is a pure rendering step: it turns a flow's success
//! value or a typed error into an `EppOutput` carrying the bound result code
//! and message. It never classifies or reclassifies failures itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flows::error::EppError;

/// Standardized EPP result codes (RFC 5730). The numeric values are fixed by
/// the protocol and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ResultCode {
    Success = 1000,
    SuccessAndClose = 1500,
    CommandUseError = 2002,
    RequiredParameterMissing = 2003,
    UnimplementedOption = 2102,
    UnimplementedExtension = 2103,
    AuthenticationError = 2200,
    AuthorizationError = 2201,
    ObjectDoesNotExist = 2303,
    ParameterValuePolicyError = 2306,
    UnimplementedObjectService = 2307,
    CommandFailed = 2400,
    AuthenticationErrorClosingConnection = 2501,
}

impl ResultCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Per RFC 5730, the 1xxx family reports success.
    pub fn is_success(self) -> bool {
        matches!(self, ResultCode::Success | ResultCode::SuccessAndClose)
    }
}

impl From<ResultCode> for u16 {
    fn from(code: ResultCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ResultCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1000 => Ok(ResultCode::Success),
            1500 => Ok(ResultCode::SuccessAndClose),
            2002 => Ok(ResultCode::CommandUseError),
            2003 => Ok(ResultCode::RequiredParameterMissing),
            2102 => Ok(ResultCode::UnimplementedOption),
            2103 => Ok(ResultCode::UnimplementedExtension),
            2200 => Ok(ResultCode::AuthenticationError),
            2201 => Ok(ResultCode::AuthorizationError),
            2303 => Ok(ResultCode::ObjectDoesNotExist),
            2306 => Ok(ResultCode::ParameterValuePolicyError),
            2307 => Ok(ResultCode::UnimplementedObjectService),
            2400 => Ok(ResultCode::CommandFailed),
            2501 => Ok(ResultCode::AuthenticationErrorClosingConnection),
            other => Err(format!("unknown EPP result code: {other}")),
        }
    }
}

/// One outbound protocol message, ready for the external XML renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EppOutput {
    pub result_code: ResultCode,
    pub message: String,
    /// Server transaction id, unique per response.
    pub server_transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl EppOutput {
    fn with_code(result_code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            result_code,
            message: message.into(),
            server_transaction_id: format!("SRV-{}", Uuid::new_v4()),
            client_transaction_id: None,
            payload: None,
        }
    }

    pub fn success() -> Self {
        Self::with_code(ResultCode::Success, "Command completed successfully")
    }

    pub fn success_and_close() -> Self {
        Self::with_code(
            ResultCode::SuccessAndClose,
            "Command completed successfully; ending session",
        )
    }

    /// Render a typed error. The code comes from the error's own family
    /// binding; the builder never invents one.
    pub fn from_error(error: &EppError) -> Self {
        Self::with_code(error.result_code(), error.to_string())
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_client_transaction_id(mut self, id: Option<String>) -> Self {
        self.client_transaction_id = id;
        self
    }

    /// True when the transport must tear the connection down after sending
    /// this response (logout, or a closing-class authentication error).
    pub fn closes_connection(&self) -> bool {
        matches!(
            self.result_code,
            ResultCode::SuccessAndClose | ResultCode::AuthenticationErrorClosingConnection
        )
    }
}
