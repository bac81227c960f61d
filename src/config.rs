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

use serde::{Deserialize, Serialize};
use std::env;

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_format: String, // "json" or "text"
    /// Consecutive failed login attempts allowed on one connection. The
    /// attempt that reaches this count is answered with a closing
    /// authentication error instead of an ordinary one.
    pub max_failed_logins: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var(constants::config::ENV_LOG_LEVEL)
                .unwrap_or_else(|_| "info".to_string()),
            log_format: env::var(constants::config::ENV_LOG_FORMAT)
                .unwrap_or_else(|_| "text".to_string()),
            max_failed_logins: env::var(constants::config::ENV_MAX_FAILED_LOGINS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(constants::session::DEFAULT_MAX_FAILED_LOGINS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_failed_logins: constants::session::DEFAULT_MAX_FAILED_LOGINS,
        }
    }
}
