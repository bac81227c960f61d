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

//! In-memory store backing tests and load-testing setups.
//!
//! Mutating operations hold the write lock across the whole check-and-mutate,
//! so they are atomic with respect to other connections. Operation counters
//! let tests assert which collaborators a flow touched; `set_unavailable`
//! simulates an unreachable database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::domain::Domain;
use crate::store::registrar::Registrar;
use crate::store::{DomainDeleteOutcome, DomainStore, RegistrarStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    registrars: RwLock<HashMap<String, Registrar>>,
    domains: RwLock<HashMap<String, Domain>>,
    registrar_lookups: AtomicUsize,
    domain_operations: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_registrar(&self, registrar: Registrar) {
        self.registrars
            .write()
            .await
            .insert(registrar.client_id().to_string(), registrar);
    }

    pub async fn insert_domain(&self, domain: Domain) {
        self.domains
            .write()
            .await
            .insert(domain.fully_qualified_domain_name.clone(), domain);
    }

    pub async fn domain_exists(&self, name: &str) -> bool {
        self.domains.read().await.contains_key(name)
    }

    /// Number of registrar lookups performed so far.
    pub fn registrar_lookups(&self) -> usize {
        self.registrar_lookups.load(Ordering::SeqCst)
    }

    /// Number of domain reads and writes performed so far.
    pub fn domain_operations(&self) -> usize {
        self.domain_operations.load(Ordering::SeqCst)
    }

    /// When set, every subsequent operation fails with `Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RegistrarStore for MemoryStore {
    async fn registrar_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<Registrar>, StoreError> {
        self.registrar_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.registrars.read().await.get(client_id).cloned())
    }
}

#[async_trait]
impl DomainStore for MemoryStore {
    async fn delete_domain(
        &self,
        name: &str,
        sponsor: &str,
        superuser: bool,
    ) -> Result<DomainDeleteOutcome, StoreError> {
        self.domain_operations.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let mut domains = self.domains.write().await;
        let Some(domain) = domains.get(name) else {
            return Ok(DomainDeleteOutcome::NotFound);
        };
        if !superuser && domain.sponsor_client_id != sponsor {
            return Ok(DomainDeleteOutcome::NotSponsor);
        }
        domains.remove(name);
        Ok(DomainDeleteOutcome::Deleted)
    }
}
