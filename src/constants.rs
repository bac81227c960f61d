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

//! Registry core constants - single source of truth for fixed values shared
//! across modules.

/// Registrar account constants.
pub mod registrar {
    /// IANA ID reserved for the internal account of the registry itself.
    /// Sessions logged in under this account get the superuser flag.
    pub const INTERNAL_IANA_REGISTRAR_ID: i64 = 9999;
}

/// Session limits.
pub mod session {
    /// Default maximum consecutive failed login attempts per connection.
    /// The attempt that reaches this count is answered with a closing
    /// authentication error.
    pub const DEFAULT_MAX_FAILED_LOGINS: u32 = 3;
}

/// Configuration environment variables.
pub mod config {
    pub const ENV_LOG_LEVEL: &str = "EPP_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "EPP_LOG_FORMAT";
    pub const ENV_MAX_FAILED_LOGINS: &str = "EPP_MAX_FAILED_LOGINS";
}
