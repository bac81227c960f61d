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

//! Transport credential validation.
//!
//! Credentials are established outside the command stream: a TLS client
//! identity plus source address, or an operator-console identity. During
//! login they are checked against the loaded registrar record. Console
//! identities have already proven who they are, so they skip the password
//! comparison. A connection may carry no credentials at all (load-testing,
//! escrow consumers); login then goes straight to the password check.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flows::error::EppError;
use crate::store::registrar::Registrar;

pub trait TransportCredentials: Send + Sync {
    /// Check the presented credential against the registrar record.
    fn validate(&self, registrar: &Registrar) -> Result<(), EppError>;

    /// True when this credential type itself asserts password-equivalent
    /// identity, letting the login flow skip the password comparison.
    fn performs_login_check(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CIDR block: {0}")]
pub struct CidrParseError(String);

/// A v4 or v6 CIDR block, e.g. `192.0.2.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CidrBlock {
    network: IpAddr,
    prefix_len: u8,
}

impl CidrBlock {
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (self.network, addr) {
            (IpAddr::V4(network), IpAddr::V4(addr)) => {
                let mask = if self.prefix_len == 0 {
                    0
                } else {
                    u32::MAX << (32 - u32::from(self.prefix_len))
                };
                (u32::from(network) & mask) == (u32::from(addr) & mask)
            }
            (IpAddr::V6(network), IpAddr::V6(addr)) => {
                let mask = if self.prefix_len == 0 {
                    0
                } else {
                    u128::MAX << (128 - u32::from(self.prefix_len))
                };
                (u128::from(network) & mask) == (u128::from(addr) & mask)
            }
            _ => false,
        }
    }
}

impl FromStr for CidrBlock {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_part, prefix_part) = match s.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (s, None),
        };
        let network: IpAddr = addr_part
            .parse()
            .map_err(|_| CidrParseError(s.to_string()))?;
        let max_prefix = if network.is_ipv4() { 32 } else { 128 };
        let prefix_len = match prefix_part {
            Some(p) => p.parse().map_err(|_| CidrParseError(s.to_string()))?,
            None => max_prefix,
        };
        if prefix_len > max_prefix {
            return Err(CidrParseError(s.to_string()));
        }
        Ok(Self {
            network,
            prefix_len,
        })
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

impl From<CidrBlock> for String {
    fn from(block: CidrBlock) -> Self {
        block.to_string()
    }
}

impl TryFrom<String> for CidrBlock {
    type Error = CidrParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// TLS transport identity: the client certificate fingerprint (if one was
/// presented) and the peer address.
#[derive(Debug, Clone)]
pub struct TlsCredentials {
    pub certificate_hash: Option<String>,
    pub client_ip: IpAddr,
}

impl TransportCredentials for TlsCredentials {
    fn validate(&self, registrar: &Registrar) -> Result<(), EppError> {
        if let Some(required) = registrar.certificate_hash() {
            match self.certificate_hash.as_deref() {
                None => return Err(EppError::missing_certificate()),
                Some(presented) if presented != required => {
                    return Err(EppError::bad_certificate())
                }
                Some(_) => {}
            }
        }
        if !registrar.ip_allowlist().is_empty()
            && !registrar
                .ip_allowlist()
                .iter()
                .any(|block| block.contains(self.client_ip))
        {
            return Err(EppError::bad_ip_address(self.client_ip));
        }
        Ok(())
    }
}

/// Operator-console identity. The console has already authenticated the
/// user, so this credential performs the login check itself.
#[derive(Debug, Clone)]
pub struct ConsoleCredentials {
    pub username: String,
    /// Registrars this console user may act for.
    pub authorized_registrars: Vec<String>,
}

impl TransportCredentials for ConsoleCredentials {
    fn validate(&self, registrar: &Registrar) -> Result<(), EppError> {
        if self
            .authorized_registrars
            .iter()
            .any(|id| id == registrar.client_id())
        {
            Ok(())
        } else {
            Err(EppError::console_user_not_authorized(&self.username))
        }
    }

    fn performs_login_check(&self) -> bool {
        true
    }
}
