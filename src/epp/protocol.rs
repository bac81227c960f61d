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

//! Protocol Definition Registry.
//!
//! The immutable catalog of what this server speaks: the single login
//! language, the provisioned object-service namespaces, and the recognized
//! service-extension URIs. Everything here is a pure lookup over process-wide
//! constants and is safe for unrestricted concurrent read.

use std::collections::BTreeSet;

/// The single language tag accepted at login.
pub const LANGUAGE: &str = "en";

/// Object service namespaces this server provisions.
pub const SUPPORTED_OBJECT_SERVICES: [&str; 3] = [
    "urn:ietf:params:xml:ns:domain-1.0",
    "urn:ietf:params:xml:ns:contact-1.0",
    "urn:ietf:params:xml:ns:host-1.0",
];

/// Service extensions negotiable at login, identified by URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceExtension {
    LaunchPhase,
    RedemptionGracePeriod,
    SecureDns,
    Fee06,
    AllocationToken,
}

impl ServiceExtension {
    const ALL: [ServiceExtension; 5] = [
        ServiceExtension::LaunchPhase,
        ServiceExtension::RedemptionGracePeriod,
        ServiceExtension::SecureDns,
        ServiceExtension::Fee06,
        ServiceExtension::AllocationToken,
    ];

    pub fn uri(self) -> &'static str {
        match self {
            ServiceExtension::LaunchPhase => "urn:ietf:params:xml:ns:launch-1.0",
            ServiceExtension::RedemptionGracePeriod => "urn:ietf:params:xml:ns:rgp-1.0",
            ServiceExtension::SecureDns => "urn:ietf:params:xml:ns:secDNS-1.1",
            ServiceExtension::Fee06 => "urn:ietf:params:xml:ns:fee-0.6",
            ServiceExtension::AllocationToken => "urn:ietf:params:xml:ns:allocationToken-1.0",
        }
    }
}

/// True if `tag` is the single language this server accepts.
pub fn is_language_supported(tag: &str) -> bool {
    tag == LANGUAGE
}

/// Requested object services minus the supported set. Returns a fresh set;
/// the input is never modified.
pub fn unsupported_object_services(requested: &[String]) -> BTreeSet<String> {
    requested
        .iter()
        .filter(|uri| !SUPPORTED_OBJECT_SERVICES.contains(&uri.as_str()))
        .cloned()
        .collect()
}

/// Resolve a service-extension URI, or `None` if this server does not
/// implement it.
pub fn service_extension_from_uri(uri: &str) -> Option<ServiceExtension> {
    ServiceExtension::ALL.iter().copied().find(|e| e.uri() == uri)
}
