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

//! The logout flow. Ends the session and tells the transport to close.

use async_trait::async_trait;

use crate::epp::command::Command;
use crate::epp::response::EppOutput;
use crate::flows::error::EppError;
use crate::flows::{Flow, FlowContext};

pub struct LogoutFlow;

#[async_trait]
impl Flow for LogoutFlow {
    fn name(&self) -> &'static str {
        "logout"
    }

    async fn run(
        &self,
        command: &Command,
        ctx: &mut FlowContext<'_>,
    ) -> Result<EppOutput, EppError> {
        if !matches!(command, Command::Logout) {
            return Err(EppError::command_failed(
                "logout flow invoked with a non-logout command",
            ));
        }
        if !ctx.session.is_authenticated() {
            return Err(EppError::not_logged_in());
        }
        ctx.session.end();
        Ok(EppOutput::success_and_close())
    }
}
