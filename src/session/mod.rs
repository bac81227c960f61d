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

//! Per-connection session state.
//!
//! One `SessionState` exists per connection and is owned exclusively by the
//! task serving it, so no locking is needed. A set `client_id` is the sole
//! authenticated signal. The login commit writes every field in one step; a
//! half-authenticated session is never observable.

pub mod connection;
pub mod credentials;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    client_id: Option<String>,
    failed_login_attempts: u32,
    superuser: bool,
    service_extension_uris: Vec<String>,
}

/// Everything a successful login writes, applied atomically.
#[derive(Debug, Clone)]
pub struct LoginCommit {
    pub client_id: String,
    pub superuser: bool,
    /// Negotiated extension URIs, in request order.
    pub service_extension_uris: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client_id.is_some()
    }

    pub fn failed_login_attempts(&self) -> u32 {
        self.failed_login_attempts
    }

    pub fn increment_failed_login_attempts(&mut self) {
        self.failed_login_attempts += 1;
    }

    pub fn is_superuser(&self) -> bool {
        self.superuser
    }

    pub fn service_extension_uris(&self) -> &[String] {
        &self.service_extension_uris
    }

    /// Single-step commit of a successful login. Resets the failed-login
    /// counter along with the identity fields.
    pub fn commit_login(&mut self, commit: LoginCommit) {
        self.client_id = Some(commit.client_id);
        self.superuser = commit.superuser;
        self.service_extension_uris = commit.service_extension_uris;
        self.failed_login_attempts = 0;
    }

    /// Clear everything; used by logout just before the connection closes.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_unauthenticated() {
        let session = SessionState::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.client_id(), None);
        assert_eq!(session.failed_login_attempts(), 0);
        assert!(!session.is_superuser());
        assert!(session.service_extension_uris().is_empty());
    }

    #[test]
    fn commit_sets_all_fields_and_resets_counter() {
        let mut session = SessionState::new();
        session.increment_failed_login_attempts();
        session.increment_failed_login_attempts();
        session.commit_login(LoginCommit {
            client_id: "NewRegistrar".to_string(),
            superuser: true,
            service_extension_uris: vec!["urn:ietf:params:xml:ns:rgp-1.0".to_string()],
        });
        assert!(session.is_authenticated());
        assert_eq!(session.client_id(), Some("NewRegistrar"));
        assert!(session.is_superuser());
        assert_eq!(session.failed_login_attempts(), 0);
        assert_eq!(
            session.service_extension_uris(),
            ["urn:ietf:params:xml:ns:rgp-1.0".to_string()]
        );
    }

    #[test]
    fn end_clears_the_session() {
        let mut session = SessionState::new();
        session.commit_login(LoginCommit {
            client_id: "NewRegistrar".to_string(),
            superuser: false,
            service_extension_uris: Vec::new(),
        });
        session.end();
        assert_eq!(session, SessionState::new());
    }
}
