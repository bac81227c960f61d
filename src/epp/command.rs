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

//! Parsed EPP command envelopes.
//!
//! One `EppCommand` represents one inbound protocol message after the
//! transport has parsed the XML. Flows read these; they never see raw bytes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Login,
    Logout,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Domain,
    Contact,
    Host,
}

/// Dispatch key: the command verb plus the object namespace it targets.
/// Session commands (login, logout) carry no object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowKey {
    pub command: CommandKind,
    pub object: Option<ObjectKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Services {
    #[serde(default)]
    pub object_services: Vec<String>,
    #[serde(default)]
    pub service_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub client_id: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    pub options: Options,
    #[serde(default)]
    pub services: Services,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainDelete {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub requested_by_registrar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Login(Login),
    Logout,
    DomainDelete(DomainDelete),
}

impl Command {
    pub fn key(&self) -> FlowKey {
        match self {
            Command::Login(_) => FlowKey {
                command: CommandKind::Login,
                object: None,
            },
            Command::Logout => FlowKey {
                command: CommandKind::Logout,
                object: None,
            },
            Command::DomainDelete(_) => FlowKey {
                command: CommandKind::Delete,
                object: Some(ObjectKind::Domain),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EppCommand {
    #[serde(flatten)]
    pub command: Command,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_transaction_id: Option<String>,
}

impl EppCommand {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            client_transaction_id: None,
        }
    }

    pub fn with_client_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.client_transaction_id = Some(id.into());
        self
    }
}
