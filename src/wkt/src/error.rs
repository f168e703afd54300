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

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Indicates a problem converting a model to or from JSON.
///
/// Unknown JSON properties are never reported through this type: the codec
/// tolerates them by design. Unknown discriminator values are recorded in the
/// decoded value instead of being raised.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    /// A value violates the declared nullability or shape contract.
    ///
    /// When the violation is detected inside a serializer it travels through
    /// the serde error channel, so [to_json][crate::model::to_json] reports
    /// it as [Serialization][CodecError::Serialization] with the violation
    /// in the message. Match on this variant only for checks performed
    /// outside a serializer, such as
    /// [check_non_nullable][crate::model::check_non_nullable] called
    /// directly.
    #[error("value violates the schema contract: {0}")]
    SchemaViolation(String),

    /// A required field was absent from the payload, or present but null.
    ///
    /// Reported when the field is consumed, not when the payload is scanned.
    #[error("required field `{0}` is absent or null")]
    MissingRequiredField(String),

    /// Problem serializing a model into JSON.
    #[error("cannot serialize model into JSON, source={0:?}")]
    Serialization(#[source] BoxError),

    /// Problem deserializing a model from JSON.
    #[error("cannot deserialize model from JSON, source={0:?}")]
    Deserialization(#[source] BoxError),
}

impl CodecError {
    pub fn schema_violation<T: Into<String>>(message: T) -> Self {
        Self::SchemaViolation(message.into())
    }

    pub fn missing_required_field<T: Into<String>>(field: T) -> Self {
        Self::MissingRequiredField(field.into())
    }

    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::Serialization(source.into())
    }

    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::Deserialization(source.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_name() {
        let err = CodecError::missing_required_field("enabled");
        assert!(err.to_string().contains("enabled"), "{err}");
    }

    #[test]
    fn serialization_preserves_source() {
        use std::error::Error as _;
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CodecError::ser(source);
        assert!(err.source().is_some(), "{err:?}");
    }
}
