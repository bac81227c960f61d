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

//! Registrar records.
//!
//! Read-only to the core except for password comparison, which the record
//! performs itself against its salted hash. The stored password never leaves
//! this module in the clear.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::registrar::INTERNAL_IANA_REGISTRAR_ID;
use crate::session::credentials::CidrBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrarState {
    /// Provisioned but not yet cleared to operate; login is refused.
    Pending,
    Active,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registrar {
    client_id: String,
    /// base64(sha256(salt || password))
    password_hash: String,
    salt: String,
    state: RegistrarState,
    iana_identifier: Option<i64>,
    /// SHA-256 fingerprint the client certificate must match, when set.
    certificate_hash: Option<String>,
    ip_allowlist: Vec<CidrBlock>,
}

impl Registrar {
    pub fn new(client_id: impl Into<String>, password: &str) -> Self {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = BASE64.encode(salt_bytes);
        let password_hash = hash_password(&salt, password);
        Self {
            client_id: client_id.into(),
            password_hash,
            salt,
            state: RegistrarState::Active,
            iana_identifier: None,
            certificate_hash: None,
            ip_allowlist: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: RegistrarState) -> Self {
        self.state = state;
        self
    }

    pub fn with_iana_identifier(mut self, id: i64) -> Self {
        self.iana_identifier = Some(id);
        self
    }

    pub fn with_certificate_hash(mut self, hash: impl Into<String>) -> Self {
        self.certificate_hash = Some(hash.into());
        self
    }

    pub fn with_ip_allowlist(mut self, blocks: Vec<CidrBlock>) -> Self {
        self.ip_allowlist = blocks;
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn state(&self) -> RegistrarState {
        self.state
    }

    pub fn iana_identifier(&self) -> Option<i64> {
        self.iana_identifier
    }

    pub fn certificate_hash(&self) -> Option<&str> {
        self.certificate_hash.as_deref()
    }

    pub fn ip_allowlist(&self) -> &[CidrBlock] {
        &self.ip_allowlist
    }

    /// Compare a candidate password against the stored salted hash.
    pub fn test_password(&self, candidate: &str) -> bool {
        self.password_hash == hash_password(&self.salt, candidate)
    }

    /// True for the registry's own internal account; sessions logged in
    /// under it run as superuser.
    pub fn is_internal(&self) -> bool {
        self.iana_identifier == Some(INTERNAL_IANA_REGISTRAR_ID)
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    BASE64.encode(hasher.finalize())
}
