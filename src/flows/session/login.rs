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

//! The login flow.
//!
//! Protocol-conformance checks (language, object services, extensions) run
//! first: they are stateless and must not consume a failed-login attempt.
//! Only credential and password failures touch the counter. The final commit
//! writes every session field in one step, so an aborted run can never leave
//! the session partially authenticated.

use async_trait::async_trait;

use crate::epp::command::{Command, Login};
use crate::epp::protocol;
use crate::epp::response::EppOutput;
use crate::flows::error::EppError;
use crate::flows::{Flow, FlowContext};
use crate::session::LoginCommit;
use crate::store::registrar::RegistrarState;

pub struct LoginFlow;

#[async_trait]
impl Flow for LoginFlow {
    fn name(&self) -> &'static str {
        "login"
    }

    async fn run(
        &self,
        command: &Command,
        ctx: &mut FlowContext<'_>,
    ) -> Result<EppOutput, EppError> {
        let Command::Login(login) = command else {
            return Err(EppError::command_failed(
                "login flow invoked with a non-login command",
            ));
        };
        run_login(login, ctx).await
    }
}

async fn run_login(login: &Login, ctx: &mut FlowContext<'_>) -> Result<EppOutput, EppError> {
    if ctx.session.is_authenticated() {
        return Err(EppError::already_logged_in());
    }
    if !protocol::is_language_supported(&login.options.language) {
        return Err(EppError::unsupported_language());
    }
    if !protocol::unsupported_object_services(&login.services.object_services).is_empty() {
        return Err(EppError::unimplemented_object_service());
    }
    // Resolve extensions in request order; the first unknown URI fails the
    // whole command before anything reaches the session.
    let mut service_extension_uris = Vec::with_capacity(login.services.service_extensions.len());
    for uri in &login.services.service_extensions {
        if protocol::service_extension_from_uri(uri).is_none() {
            return Err(EppError::unimplemented_extension());
        }
        service_extension_uris.push(uri.clone());
    }

    let registrar = ctx
        .registrars
        .registrar_by_client_id(&login.client_id)
        .await?
        .ok_or_else(|| EppError::bad_registrar_client_id(&login.client_id))?;

    // Credential failures count as a failed login on this connection and
    // propagate unchanged.
    if let Some(credentials) = ctx.credentials {
        if let Err(e) = credentials.validate(&registrar) {
            ctx.session.increment_failed_login_attempts();
            return Err(e);
        }
    }

    let requires_login_check = ctx.credentials.map_or(true, |c| !c.performs_login_check());
    if requires_login_check && !registrar.test_password(&login.password) {
        ctx.session.increment_failed_login_attempts();
        if ctx.session.failed_login_attempts() >= ctx.config.max_failed_logins {
            return Err(EppError::too_many_failed_logins());
        }
        return Err(EppError::bad_registrar_password());
    }
    if registrar.state() == RegistrarState::Pending {
        return Err(EppError::registrar_account_not_active());
    }
    if login.new_password.is_some() {
        // In-band password rotation is not a supported operation.
        return Err(EppError::password_changes_not_supported());
    }

    ctx.session.commit_login(LoginCommit {
        client_id: login.client_id.clone(),
        superuser: registrar.is_internal(),
        service_extension_uris,
    });
    Ok(EppOutput::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::epp::command::{Options, Services};
    use crate::epp::response::ResultCode;
    use crate::session::credentials::{
        ConsoleCredentials, TlsCredentials, TransportCredentials,
    };
    use crate::session::SessionState;
    use crate::store::memory::MemoryStore;
    use crate::store::registrar::{Registrar, RegistrarState};

    fn login_command(client_id: &str, password: &str) -> Login {
        Login {
            client_id: client_id.to_string(),
            password: password.to_string(),
            new_password: None,
            options: Options {
                language: "en".to_string(),
            },
            services: Services {
                object_services: vec!["urn:ietf:params:xml:ns:domain-1.0".to_string()],
                service_extensions: Vec::new(),
            },
        }
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_registrar(Registrar::new("NewRegistrar", "password2"))
            .await;
        store
    }

    async fn attempt(
        store: &MemoryStore,
        session: &mut SessionState,
        credentials: Option<&dyn TransportCredentials>,
        login: &Login,
    ) -> Result<EppOutput, EppError> {
        let config = Config::default();
        let mut ctx = FlowContext {
            session,
            credentials,
            registrars: store,
            domains: store,
            config: &config,
        };
        run_login(login, &mut ctx).await
    }

    #[tokio::test]
    async fn success() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let output = attempt(&store, &mut session, None, &login_command("NewRegistrar", "password2"))
            .await
            .unwrap();
        assert_eq!(output.result_code, ResultCode::Success);
        assert_eq!(session.client_id(), Some("NewRegistrar"));
        assert!(!session.is_superuser());
        assert_eq!(session.failed_login_attempts(), 0);
    }

    #[tokio::test]
    async fn success_sets_superuser_for_internal_account() {
        let store = MemoryStore::new();
        store
            .insert_registrar(Registrar::new("Internal", "password2").with_iana_identifier(9999))
            .await;
        store
            .insert_registrar(Registrar::new("TheRegistrar", "password2").with_iana_identifier(61))
            .await;

        let mut session = SessionState::new();
        attempt(&store, &mut session, None, &login_command("Internal", "password2"))
            .await
            .unwrap();
        assert!(session.is_superuser());

        let mut session = SessionState::new();
        attempt(&store, &mut session, None, &login_command("TheRegistrar", "password2"))
            .await
            .unwrap();
        assert!(!session.is_superuser());
    }

    #[tokio::test]
    async fn success_negotiates_extensions_in_request_order() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let mut login = login_command("NewRegistrar", "password2");
        login.services.service_extensions = vec![
            "urn:ietf:params:xml:ns:secDNS-1.1".to_string(),
            "urn:ietf:params:xml:ns:rgp-1.0".to_string(),
        ];
        attempt(&store, &mut session, None, &login).await.unwrap();
        assert_eq!(
            session.service_extension_uris(),
            [
                "urn:ietf:params:xml:ns:secDNS-1.1".to_string(),
                "urn:ietf:params:xml:ns:rgp-1.0".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn second_login_is_rejected_whatever_the_parameters() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        attempt(&store, &mut session, None, &login_command("NewRegistrar", "password2"))
            .await
            .unwrap();

        // Even a garbage request fails with the same command-use error.
        let mut garbage = login_command("NoSuchRegistrar", "wrong");
        garbage.options.language = "fr".to_string();
        let err = attempt(&store, &mut session, None, &garbage).await.unwrap_err();
        assert_eq!(err, EppError::already_logged_in());
        assert_eq!(err.result_code(), ResultCode::CommandUseError);
    }

    #[tokio::test]
    async fn unsupported_language_fails_before_any_registrar_lookup() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let mut login = login_command("NewRegistrar", "password2");
        login.options.language = "fr".to_string();
        let err = attempt(&store, &mut session, None, &login).await.unwrap_err();
        assert_eq!(err.result_code(), ResultCode::ParameterValuePolicyError);
        assert_eq!(store.registrar_lookups(), 0);
        assert_eq!(session.failed_login_attempts(), 0);
    }

    #[tokio::test]
    async fn unknown_object_service_is_rejected() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let mut login = login_command("NewRegistrar", "password2");
        login
            .services
            .object_services
            .push("urn:ietf:params:xml:ns:finance-1.0".to_string());
        let err = attempt(&store, &mut session, None, &login).await.unwrap_err();
        assert_eq!(err.result_code(), ResultCode::UnimplementedObjectService);
        assert_eq!(store.registrar_lookups(), 0);
    }

    #[tokio::test]
    async fn unknown_extension_fails_fast_and_commits_nothing() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let mut login = login_command("NewRegistrar", "password2");
        login.services.service_extensions = vec![
            // Resolvable, but must not be partially committed.
            "urn:ietf:params:xml:ns:rgp-1.0".to_string(),
            "urn:ietf:params:xml:ns:bogus-1.0".to_string(),
        ];
        let err = attempt(&store, &mut session, None, &login).await.unwrap_err();
        assert_eq!(err.result_code(), ResultCode::UnimplementedExtension);
        assert!(!session.is_authenticated());
        assert!(session.service_extension_uris().is_empty());
        assert_eq!(store.registrar_lookups(), 0);
    }

    #[tokio::test]
    async fn unknown_client_id_is_an_authentication_error() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let err = attempt(&store, &mut session, None, &login_command("NoSuchRegistrar", "password2"))
            .await
            .unwrap_err();
        assert_eq!(err.result_code(), ResultCode::AuthenticationError);
        assert!(!err.closes_connection());
    }

    #[tokio::test]
    async fn third_consecutive_password_failure_closes_the_connection() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let bad = login_command("NewRegistrar", "wrong");

        let first = attempt(&store, &mut session, None, &bad).await.unwrap_err();
        assert_eq!(first, EppError::bad_registrar_password());
        assert_eq!(session.failed_login_attempts(), 1);

        let second = attempt(&store, &mut session, None, &bad).await.unwrap_err();
        assert_eq!(second, EppError::bad_registrar_password());
        assert_eq!(session.failed_login_attempts(), 2);

        let third = attempt(&store, &mut session, None, &bad).await.unwrap_err();
        assert_eq!(third, EppError::too_many_failed_logins());
        assert!(third.closes_connection());
        assert_eq!(session.failed_login_attempts(), 3);
    }

    #[tokio::test]
    async fn successful_login_resets_the_counter() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let bad = login_command("NewRegistrar", "wrong");
        attempt(&store, &mut session, None, &bad).await.unwrap_err();
        attempt(&store, &mut session, None, &bad).await.unwrap_err();
        assert_eq!(session.failed_login_attempts(), 2);

        attempt(&store, &mut session, None, &login_command("NewRegistrar", "password2"))
            .await
            .unwrap();
        assert_eq!(session.failed_login_attempts(), 0);
    }

    #[tokio::test]
    async fn pending_account_is_not_active_and_consumes_no_attempt() {
        let store = MemoryStore::new();
        store
            .insert_registrar(
                Registrar::new("NewRegistrar", "password2").with_state(RegistrarState::Pending),
            )
            .await;
        let mut session = SessionState::new();
        let err = attempt(&store, &mut session, None, &login_command("NewRegistrar", "password2"))
            .await
            .unwrap_err();
        assert_eq!(err, EppError::registrar_account_not_active());
        assert_eq!(err.result_code(), ResultCode::AuthorizationError);
        assert_eq!(session.failed_login_attempts(), 0);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn in_band_password_change_is_unimplemented() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let mut login = login_command("NewRegistrar", "password2");
        login.new_password = Some("password3".to_string());
        let err = attempt(&store, &mut session, None, &login).await.unwrap_err();
        assert_eq!(err.result_code(), ResultCode::UnimplementedOption);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn credential_failure_counts_and_propagates_unchanged() {
        let store = MemoryStore::new();
        store
            .insert_registrar(
                Registrar::new("NewRegistrar", "password2").with_certificate_hash("cert-hash-1"),
            )
            .await;
        let mut session = SessionState::new();
        let creds = TlsCredentials {
            certificate_hash: Some("cert-hash-2".to_string()),
            client_ip: "192.0.2.1".parse().unwrap(),
        };
        let err = attempt(
            &store,
            &mut session,
            Some(&creds),
            &login_command("NewRegistrar", "password2"),
        )
        .await
        .unwrap_err();
        // The validator's own error, not a rewrapped one.
        assert_eq!(err, EppError::bad_certificate());
        assert_eq!(session.failed_login_attempts(), 1);
    }

    #[tokio::test]
    async fn console_identity_skips_the_password_comparison() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let creds = ConsoleCredentials {
            username: "operator@registry.example".to_string(),
            authorized_registrars: vec!["NewRegistrar".to_string()],
        };
        let output = attempt(
            &store,
            &mut session,
            Some(&creds),
            &login_command("NewRegistrar", "not-the-password"),
        )
        .await
        .unwrap();
        assert_eq!(output.result_code, ResultCode::Success);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn unauthorized_console_user_counts_a_failed_attempt() {
        let store = seeded_store().await;
        let mut session = SessionState::new();
        let creds = ConsoleCredentials {
            username: "stranger@registry.example".to_string(),
            authorized_registrars: vec!["TheRegistrar".to_string()],
        };
        let err = attempt(
            &store,
            &mut session,
            Some(&creds),
            &login_command("NewRegistrar", "password2"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.result_code(), ResultCode::AuthenticationError);
        assert_eq!(session.failed_login_attempts(), 1);
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_a_server_side_failure() {
        let store = seeded_store().await;
        store.set_unavailable(true);
        let mut session = SessionState::new();
        let err = attempt(&store, &mut session, None, &login_command("NewRegistrar", "password2"))
            .await
            .unwrap_err();
        assert_eq!(err.result_code(), ResultCode::CommandFailed);
        // An outage is not the client's fault; no attempt is consumed.
        assert_eq!(session.failed_login_attempts(), 0);
    }
}
