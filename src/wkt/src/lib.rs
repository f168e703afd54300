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

//! Well-known types for the Azure client libraries.
//!
//! The REST APIs consumed by these libraries share a number of conventions:
//! fields may be entirely absent from a payload (which is not the same thing
//! as being present and null), unknown properties must be tolerated, and
//! timestamps use RFC 3339. This crate holds the types implementing those
//! conventions, shared by all the generated model crates.

mod error;
pub use crate::error::*;
mod optional;
pub use crate::optional::*;
mod timestamp;
pub use crate::timestamp::*;
pub mod model;
