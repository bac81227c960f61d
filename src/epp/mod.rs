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

//! EPP protocol model: parsed command envelopes, the protocol definition
//! registry, and protocol outputs. The transport layer parses XML into these
//! structures and serializes outputs back out; nothing in here touches the
//! wire.

pub mod command;
pub mod protocol;
pub mod response;
