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

//! Shared types for the Azure client libraries.
//!
//! This crate holds the pieces every client surface needs: the response
//! envelope attaching transport metadata to a typed body, and the error type
//! returned to applications. Transport itself (sockets, credentials, retry
//! policies) lives elsewhere; nothing here performs I/O.

pub mod error;
pub mod response;

/// The result type used by all client surfaces.
pub type Result<T> = std::result::Result<T, crate::error::Error>;
