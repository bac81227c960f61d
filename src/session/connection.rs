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

//! Per-connection command driver.
//!
//! The transport owns framing, TLS, and XML parsing; it hands this driver a
//! stream of parsed envelopes and reads outputs back. One task serves one
//! connection for its whole life, so commands are strictly sequential and the
//! session needs no locking. The protocol is half-duplex: the next command is
//! not read until the previous response is handed off. Closing the channels
//! is the only cancellation signal; anything already committed to the store
//! stands.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::Config;
use crate::epp::command::EppCommand;
use crate::epp::response::EppOutput;
use crate::flows::{FlowContext, FlowRegistry};
use crate::session::credentials::TransportCredentials;
use crate::session::SessionState;
use crate::store::{DomainStore, RegistrarStore};

pub struct Connection {
    registry: Arc<FlowRegistry>,
    registrars: Arc<dyn RegistrarStore>,
    domains: Arc<dyn DomainStore>,
    credentials: Option<Box<dyn TransportCredentials>>,
    config: Arc<Config>,
    session: SessionState,
}

impl Connection {
    pub fn new(
        registry: Arc<FlowRegistry>,
        registrars: Arc<dyn RegistrarStore>,
        domains: Arc<dyn DomainStore>,
        credentials: Option<Box<dyn TransportCredentials>>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            registry,
            registrars,
            domains,
            credentials,
            config,
            session: SessionState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Run a single envelope, rendering any error into a protocol output.
    /// The second value is true when the connection must close after the
    /// response is sent.
    pub async fn execute(&mut self, envelope: &EppCommand) -> (EppOutput, bool) {
        let mut ctx = FlowContext {
            session: &mut self.session,
            credentials: self.credentials.as_deref(),
            registrars: self.registrars.as_ref(),
            domains: self.domains.as_ref(),
            config: &self.config,
        };
        let (output, close) = match self.registry.run(envelope, &mut ctx).await {
            Ok(output) => {
                let close = output.closes_connection();
                (output, close)
            }
            Err(e) => {
                let close = e.closes_connection();
                (EppOutput::from_error(&e), close)
            }
        };
        (
            output.with_client_transaction_id(envelope.client_transaction_id.clone()),
            close,
        )
    }

    /// Serve one connection: execute commands in arrival order until the
    /// peer goes away or a response requires the connection to close.
    pub async fn serve(
        mut self,
        mut commands: mpsc::Receiver<EppCommand>,
        outputs: mpsc::Sender<EppOutput>,
    ) {
        while let Some(envelope) = commands.recv().await {
            let (output, close) = self.execute(&envelope).await;
            if outputs.send(output).await.is_err() {
                // Peer is gone; nothing further can be delivered.
                debug!("output channel closed, abandoning session");
                break;
            }
            if close {
                break;
            }
        }
    }
}
