// Copyright 2025 Azure Rust Client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generated models for Synapse Artifacts pipeline activities.
//!
//! Activities are polymorphic: the wire representation carries a `type`
//! property selecting the subtype. Payloads with a `type` value this crate
//! does not know decode into [model::UnknownActivity], which still exposes
//! the base activity fields.

pub mod model;
mod serialization;
