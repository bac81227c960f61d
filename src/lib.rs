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

//! epp-core: session and command-execution core of an EPP registry backend.
//!
//! This library implements the stateful half of an EPP server: registrar
//! authentication over persistent connections, per-connection session state,
//! dispatch of parsed commands to business-logic flows, and the mapping of
//! flow outcomes onto standardized EPP result codes. Transport framing, XML
//! rendering, and the durable store itself live outside this crate.

pub mod config;
pub mod constants;
pub mod epp;
pub mod flows;
pub mod session;
pub mod store;
pub mod telemetry;
