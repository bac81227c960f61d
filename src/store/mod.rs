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

//! Durable-store boundary.
//!
//! The registry database is an external transactional collaborator; the core
//! reaches it only through these narrow async traits. A flow that must check
//! and mutate together gets a single store operation whose outcome reports
//! what happened, so the check stays atomic with respect to other
//! connections. Store failures are typed and surface at the flow boundary as
//! server-side errors; they are never swallowed.

pub mod domain;
pub mod memory;
pub mod registrar;

use async_trait::async_trait;
use thiserror::Error;

use crate::store::registrar::Registrar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out")]
    Timeout,
}

/// Outcome of the atomic check-and-delete on a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainDeleteOutcome {
    Deleted,
    NotFound,
    /// The acting registrar does not sponsor the domain.
    NotSponsor,
}

#[async_trait]
pub trait RegistrarStore: Send + Sync {
    async fn registrar_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<Registrar>, StoreError>;
}

#[async_trait]
pub trait DomainStore: Send + Sync {
    /// Delete `name` if it exists and `sponsor` may act on it. The existence
    /// and sponsorship checks run inside the same store transaction as the
    /// delete.
    async fn delete_domain(
        &self,
        name: &str,
        sponsor: &str,
        superuser: bool,
    ) -> Result<DomainDeleteOutcome, StoreError>;
}
