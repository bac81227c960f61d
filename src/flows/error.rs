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

//! The EPP error taxonomy.
//!
//! Every flow failure is a value of this closed enum. Each family is bound
//! to exactly one standardized result code, so anything a flow can raise
//! maps to a valid protocol response; an unclassified failure is not
//! representable. Authentication errors come in two policies: ordinary ones
//! leave the connection open for retry, closing ones require the transport
//! to drop the connection after the response is sent.

use std::net::IpAddr;

use thiserror::Error;

use crate::epp::response::ResultCode;
use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EppError {
    /// Credential or identity failure. The message never reveals more than
    /// the shared authentication class.
    #[error("{message}")]
    Authentication { message: String, closing: bool },

    /// Authenticated but not permitted to act.
    #[error("{message}")]
    Authorization { message: String },

    /// Syntactically valid command, illegal in the current session state.
    #[error("{message}")]
    CommandUse { message: String },

    /// A supplied parameter value is rejected by server policy.
    #[error("{message}")]
    ParameterValuePolicy { message: String },

    #[error("{message}")]
    RequiredParameterMissing { message: String },

    #[error("{message}")]
    ObjectDoesNotExist { message: String },

    #[error("{message}")]
    UnimplementedExtension { message: String },

    #[error("{message}")]
    UnimplementedObjectService { message: String },

    #[error("{message}")]
    UnimplementedOption { message: String },

    /// Server-side failure executing an otherwise well-formed command.
    /// Distinct from every client-request error so clients can tell "your
    /// request was rejected" from "the registry is unavailable".
    #[error("{message}")]
    CommandFailed { message: String },
}

impl EppError {
    /// The standardized result code bound to this error's family.
    pub fn result_code(&self) -> ResultCode {
        match self {
            EppError::Authentication { closing: false, .. } => ResultCode::AuthenticationError,
            EppError::Authentication { closing: true, .. } => {
                ResultCode::AuthenticationErrorClosingConnection
            }
            EppError::Authorization { .. } => ResultCode::AuthorizationError,
            EppError::CommandUse { .. } => ResultCode::CommandUseError,
            EppError::ParameterValuePolicy { .. } => ResultCode::ParameterValuePolicyError,
            EppError::RequiredParameterMissing { .. } => ResultCode::RequiredParameterMissing,
            EppError::ObjectDoesNotExist { .. } => ResultCode::ObjectDoesNotExist,
            EppError::UnimplementedExtension { .. } => ResultCode::UnimplementedExtension,
            EppError::UnimplementedObjectService { .. } => ResultCode::UnimplementedObjectService,
            EppError::UnimplementedOption { .. } => ResultCode::UnimplementedOption,
            EppError::CommandFailed { .. } => ResultCode::CommandFailed,
        }
    }

    /// True when the transport must close the connection after responding.
    pub fn closes_connection(&self) -> bool {
        matches!(self, EppError::Authentication { closing: true, .. })
    }

    // Canonical constructors. The messages are part of the protocol surface.

    pub fn already_logged_in() -> Self {
        EppError::CommandUse {
            message: "Registrar is already logged in".to_string(),
        }
    }

    pub fn not_logged_in() -> Self {
        EppError::CommandUse {
            message: "Registrar is not logged in".to_string(),
        }
    }

    pub fn unsupported_language() -> Self {
        EppError::ParameterValuePolicy {
            message: "Specified language is not supported".to_string(),
        }
    }

    pub fn unimplemented_object_service() -> Self {
        EppError::UnimplementedObjectService {
            message: "Specified object service is not implemented".to_string(),
        }
    }

    pub fn unimplemented_extension() -> Self {
        EppError::UnimplementedExtension {
            message: "Specified extension is not implemented".to_string(),
        }
    }

    /// Raised by the dispatcher when no flow is registered for a
    /// command/object pair.
    pub fn unregistered_flow() -> Self {
        EppError::UnimplementedObjectService {
            message: "Specified command is not implemented for this object service".to_string(),
        }
    }

    pub fn bad_registrar_client_id(client_id: &str) -> Self {
        EppError::Authentication {
            message: format!("Registrar with this client ID could not be found: {client_id}"),
            closing: false,
        }
    }

    pub fn bad_registrar_password() -> Self {
        EppError::Authentication {
            message: "Registrar password is incorrect".to_string(),
            closing: false,
        }
    }

    pub fn too_many_failed_logins() -> Self {
        EppError::Authentication {
            message: "Registrar login failed too many times".to_string(),
            closing: true,
        }
    }

    pub fn registrar_account_not_active() -> Self {
        EppError::Authorization {
            message: "Registrar account is not active".to_string(),
        }
    }

    pub fn password_changes_not_supported() -> Self {
        EppError::UnimplementedOption {
            message: "In-band password changes are not supported".to_string(),
        }
    }

    pub fn missing_certificate() -> Self {
        EppError::Authentication {
            message: "Registrar certificate was not presented".to_string(),
            closing: true,
        }
    }

    pub fn bad_certificate() -> Self {
        EppError::Authentication {
            message: "Registrar certificate does not match stored certificate".to_string(),
            closing: false,
        }
    }

    pub fn bad_ip_address(address: IpAddr) -> Self {
        EppError::Authentication {
            message: format!("Registrar IP address {address} is not in stored allowlist"),
            closing: false,
        }
    }

    pub fn console_user_not_authorized(username: &str) -> Self {
        EppError::Authentication {
            message: format!("User {username} is not authorized to act for this registrar"),
            closing: false,
        }
    }

    pub fn missing_parameter(name: &str) -> Self {
        EppError::RequiredParameterMissing {
            message: format!("Required parameter missing: {name}"),
        }
    }

    pub fn object_does_not_exist(id: &str) -> Self {
        EppError::ObjectDoesNotExist {
            message: format!("The object with given ID ({id}) doesn't exist"),
        }
    }

    pub fn not_authorized_for_object(id: &str) -> Self {
        EppError::Authorization {
            message: format!("Registrar is not authorized to access the object with given ID ({id})"),
        }
    }

    pub fn command_failed(message: impl Into<String>) -> Self {
        EppError::CommandFailed {
            message: message.into(),
        }
    }
}

impl From<StoreError> for EppError {
    fn from(error: StoreError) -> Self {
        EppError::CommandFailed {
            message: format!("Registry store failure: {error}"),
        }
    }
}
