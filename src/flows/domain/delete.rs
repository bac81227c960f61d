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

//! The domain delete flow.
//!
//! Parameter validation runs before any store access. The existence and
//! sponsorship checks happen inside the store's own transaction, so the
//! delete is atomic with respect to other connections; superuser sessions
//! may delete domains they do not sponsor.

use async_trait::async_trait;

use crate::epp::command::Command;
use crate::epp::response::EppOutput;
use crate::flows::error::EppError;
use crate::flows::{Flow, FlowContext};
use crate::store::DomainDeleteOutcome;

pub struct DomainDeleteFlow;

#[async_trait]
impl Flow for DomainDeleteFlow {
    fn name(&self) -> &'static str {
        "domain delete"
    }

    async fn run(
        &self,
        command: &Command,
        ctx: &mut FlowContext<'_>,
    ) -> Result<EppOutput, EppError> {
        let Command::DomainDelete(delete) = command else {
            return Err(EppError::command_failed(
                "domain delete flow invoked with a different command",
            ));
        };
        let Some(client_id) = ctx.session.client_id().map(str::to_owned) else {
            return Err(EppError::not_logged_in());
        };
        if delete.reason.as_deref().map_or(true, |r| r.trim().is_empty()) {
            return Err(EppError::missing_parameter("reason"));
        }

        let outcome = ctx
            .domains
            .delete_domain(&delete.domain_name, &client_id, ctx.session.is_superuser())
            .await?;
        match outcome {
            DomainDeleteOutcome::Deleted => Ok(EppOutput::success()),
            DomainDeleteOutcome::NotFound => {
                Err(EppError::object_does_not_exist(&delete.domain_name))
            }
            DomainDeleteOutcome::NotSponsor => {
                Err(EppError::not_authorized_for_object(&delete.domain_name))
            }
        }
    }
}
