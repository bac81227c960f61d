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

//! Domain records. Only the fields the session core's flows need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub fully_qualified_domain_name: String,
    pub sponsor_client_id: String,
    pub creation_time: DateTime<Utc>,
}

impl Domain {
    pub fn new(name: impl Into<String>, sponsor: impl Into<String>) -> Self {
        Self {
            fully_qualified_domain_name: name.into(),
            sponsor_client_id: sponsor.into(),
            creation_time: Utc::now(),
        }
    }
}
