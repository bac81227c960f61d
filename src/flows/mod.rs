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

//! Flow contract and dispatcher.
//!
//! A flow is the unit of business logic bound to one (command, object) pair.
//! The registry selects the flow for an envelope, runs it against the
//! connection's session, and logs every protocol error exactly once at this
//! boundary before handing it back unchanged. Registering a new command is
//! one `register` call; the authentication and error-reporting contract is
//! shared by every flow.

pub mod domain;
pub mod error;
pub mod session;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use crate::epp::command::{Command, CommandKind, EppCommand, FlowKey, ObjectKind};
use crate::epp::response::EppOutput;
use crate::flows::error::EppError;
use crate::session::credentials::TransportCredentials;
use crate::session::SessionState;
use crate::store::{DomainStore, RegistrarStore};

/// Everything a flow may touch: the connection's session (read/write), the
/// transport credentials established outside the command stream, the durable
/// store, and server config.
pub struct FlowContext<'a> {
    pub session: &'a mut SessionState,
    pub credentials: Option<&'a dyn TransportCredentials>,
    pub registrars: &'a dyn RegistrarStore,
    pub domains: &'a dyn DomainStore,
    pub config: &'a Config,
}

#[async_trait]
pub trait Flow: Send + Sync {
    /// Flow name used in logs.
    fn name(&self) -> &'static str;

    /// Execute the business logic for `command` against the session.
    async fn run(
        &self,
        command: &Command,
        ctx: &mut FlowContext<'_>,
    ) -> Result<EppOutput, EppError>;
}

pub struct FlowRegistry {
    flows: HashMap<FlowKey, Arc<dyn Flow>>,
}

impl FlowRegistry {
    pub fn new() -> Self {
        Self {
            flows: HashMap::new(),
        }
    }

    /// Registry with every flow this server implements.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            FlowKey {
                command: CommandKind::Login,
                object: None,
            },
            Arc::new(session::login::LoginFlow),
        );
        registry.register(
            FlowKey {
                command: CommandKind::Logout,
                object: None,
            },
            Arc::new(session::logout::LogoutFlow),
        );
        registry.register(
            FlowKey {
                command: CommandKind::Delete,
                object: Some(ObjectKind::Domain),
            },
            Arc::new(domain::delete::DomainDeleteFlow),
        );
        registry
    }

    pub fn register(&mut self, key: FlowKey, flow: Arc<dyn Flow>) {
        self.flows.insert(key, flow);
    }

    /// Select and run the flow for `envelope`. Any protocol error is logged
    /// as a warning here, once, and returned unchanged.
    pub async fn run(
        &self,
        envelope: &EppCommand,
        ctx: &mut FlowContext<'_>,
    ) -> Result<EppOutput, EppError> {
        let key = envelope.command.key();
        let Some(flow) = self.flows.get(&key) else {
            let err = EppError::unregistered_flow();
            warn!(?key, "dispatch failed: {}", err);
            return Err(err);
        };
        match flow.run(&envelope.command, ctx).await {
            Ok(output) => {
                info!(
                    flow = flow.name(),
                    code = output.result_code.code(),
                    "command completed"
                );
                Ok(output)
            }
            Err(e) => {
                warn!(flow = flow.name(), "command failed: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for FlowRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
