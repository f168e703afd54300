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

// Code generated from the App Service REST schema. Manual changes will be
// lost on regeneration.

use wkt::Optional;

/// The version of the platform running the Authentication / Authorization
/// feature for the current app.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AuthPlatform {
    /// `true` if the Authentication / Authorization feature is enabled for
    /// the current app; otherwise, `false`. Required by the schema; a null
    /// on the wire leaves this unset and the error surfaces on access.
    pub is_enabled: Optional<bool>,

    /// The RuntimeVersion of the Authentication / Authorization feature in
    /// use for the current app. Nullable.
    pub runtime_version: Optional<Option<String>>,

    /// The path of the config file containing auth settings if they come
    /// from a file.
    pub config_file_path: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl AuthPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [is_enabled][crate::model::AuthPlatform::is_enabled].
    pub fn set_is_enabled<V: Into<bool>>(mut self, v: V) -> Self {
        self.is_enabled = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [runtime_version][crate::model::AuthPlatform::runtime_version].
    pub fn set_runtime_version<V: Into<String>>(mut self, v: V) -> Self {
        self.runtime_version = Optional::set(Some(v.into()));
        self
    }

    /// Sets [runtime_version][crate::model::AuthPlatform::runtime_version]
    /// to an explicit null, which serializes as JSON null.
    pub fn set_runtime_version_null(mut self) -> Self {
        self.runtime_version = Optional::set(None);
        self
    }

    /// Sets the value of
    /// [config_file_path][crate::model::AuthPlatform::config_file_path].
    pub fn set_config_file_path<V: Into<String>>(mut self, v: V) -> Self {
        self.config_file_path = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for AuthPlatform {
    fn type_name() -> &'static str {
        "AuthPlatform"
    }
}

impl std::fmt::Debug for AuthPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AuthPlatform");
        debug_struct.field("is_enabled", &self.is_enabled);
        debug_struct.field("runtime_version", &self.runtime_version);
        debug_struct.field("config_file_path", &self.config_file_path);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
