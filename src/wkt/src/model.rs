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

//! Define traits required of all models.

use crate::CodecError as Error;

/// The JSON object type used for unknown-field capture.
pub type Map = serde_json::Map<String, serde_json::Value>;

/// A trait that must be implemented by all models.
///
/// A model is the typed representation of one JSON schema entity. Its serde
/// implementations write only the fields that are set, in schema-defined key
/// order, and tolerate unknown properties on read.
pub trait Model: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The schema entity name of this model.
    fn type_name() -> &'static str;
}

/// Serializes `model` into a JSON value tree.
///
/// The result contains exactly the keys whose fields are set. Errors surface
/// immediately; they are never silently swallowed.
pub fn to_json<T>(model: &T) -> Result<serde_json::Value, Error>
where
    T: Model,
{
    serde_json::to_value(model).map_err(Error::ser)
}

/// Deserializes a model from a parsed JSON value tree.
///
/// Properties not named by the schema are skipped without error. Fields whose
/// keys were never seen remain unset.
pub fn from_json<T>(value: serde_json::Value) -> Result<T, Error>
where
    T: Model,
{
    serde_json::from_value(value).map_err(Error::deser)
}

/// Rejects a JSON null stored in a field the schema marks non-nullable.
///
/// Free-form fields (typed `serde_json::Value`) can hold any JSON value
/// including null; the per-model serializers call this before writing such a
/// field when the schema does not allow null there.
pub fn check_non_nullable(field: &str, value: &serde_json::Value) -> Result<(), Error> {
    if value.is_null() {
        return Err(Error::schema_violation(format!(
            "field `{field}` is not nullable"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    struct TestModel {
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
        #[serde(flatten)]
        _unknown_fields: Map,
    }

    impl Model for TestModel {
        fn type_name() -> &'static str {
            "TestModel"
        }
    }

    #[test]
    fn round_trip() -> anyhow::Result<()> {
        let model = TestModel {
            name: "abc".into(),
            ..Default::default()
        };
        let value = to_json(&model)?;
        assert_eq!(value, json!({"name": "abc"}));
        let back = from_json::<TestModel>(value)?;
        assert_eq!(back, model);
        Ok(())
    }

    #[test]
    fn unknown_keys_tolerated() -> anyhow::Result<()> {
        let model = from_json::<TestModel>(json!({"name": "abc", "futureField": 1}))?;
        assert_eq!(model.name, "abc");
        assert_eq!(model._unknown_fields.get("futureField"), Some(&json!(1)));
        Ok(())
    }

    #[test]
    fn non_nullable_rejects_null() {
        let err = check_non_nullable("timeout", &serde_json::Value::Null).unwrap_err();
        assert!(
            matches!(err, crate::CodecError::SchemaViolation(_)),
            "{err:?}"
        );
        check_non_nullable("timeout", &json!("0.01:00:00")).unwrap();
    }
}
