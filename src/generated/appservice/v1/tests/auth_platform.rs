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

//! Test serialization for the auth platform settings model.

use azure_appservice_v1::model::AuthPlatform;
use serde_json::json;
use wkt::Optional;

#[test]
fn deserialize_partial_payload() -> anyhow::Result<()> {
    let platform = wkt::model::from_json::<AuthPlatform>(json!({"enabled": true}))?;
    assert_eq!(platform.is_enabled, Optional::set(true));
    assert!(platform.runtime_version.is_unset());
    assert!(platform.config_file_path.is_unset());
    Ok(())
}

#[test]
fn unset_fields_do_not_serialize() -> anyhow::Result<()> {
    let platform = AuthPlatform::new();
    assert_eq!(wkt::model::to_json(&platform)?, json!({}));

    let platform = AuthPlatform::new().set_is_enabled(false);
    assert_eq!(wkt::model::to_json(&platform)?, json!({"enabled": false}));
    Ok(())
}

#[test]
fn explicit_default_still_serializes() -> anyhow::Result<()> {
    let platform = AuthPlatform::new().set_config_file_path("");
    assert_eq!(
        wkt::model::to_json(&platform)?,
        json!({"configFilePath": ""})
    );
    Ok(())
}

#[test]
fn round_trip_fully_set() -> anyhow::Result<()> {
    let platform = AuthPlatform::new()
        .set_is_enabled(true)
        .set_runtime_version("~2")
        .set_config_file_path("auth.json");
    let value = wkt::model::to_json(&platform)?;
    assert_eq!(
        value,
        json!({
            "enabled": true,
            "runtimeVersion": "~2",
            "configFilePath": "auth.json",
        })
    );
    let back = wkt::model::from_json::<AuthPlatform>(value)?;
    assert_eq!(back, platform);
    Ok(())
}

#[test]
fn unknown_keys_are_tolerated_and_preserved() -> anyhow::Result<()> {
    let input = json!({"enabled": true, "futureField": 1});
    let platform = wkt::model::from_json::<AuthPlatform>(input.clone())?;
    assert_eq!(platform.is_enabled, Optional::set(true));

    // Typed access is identical to a payload without the extra key.
    let plain = wkt::model::from_json::<AuthPlatform>(json!({"enabled": true}))?;
    assert_eq!(platform.is_enabled, plain.is_enabled);
    assert_eq!(platform.runtime_version, plain.runtime_version);
    assert_eq!(platform.config_file_path, plain.config_file_path);

    // The unknown key survives a round trip.
    assert_eq!(wkt::model::to_json(&platform)?, input);
    Ok(())
}

#[test]
fn nullable_field_distinguishes_null_from_absent() -> anyhow::Result<()> {
    let platform = wkt::model::from_json::<AuthPlatform>(json!({"runtimeVersion": null}))?;
    assert_eq!(platform.runtime_version, Optional::set(None));
    assert_eq!(
        wkt::model::to_json(&platform)?,
        json!({"runtimeVersion": null})
    );

    let platform = wkt::model::from_json::<AuthPlatform>(json!({}))?;
    assert!(platform.runtime_version.is_unset());
    Ok(())
}

#[test]
fn required_null_fails_on_access() -> anyhow::Result<()> {
    // The scan itself tolerates a null for the required field.
    let platform = wkt::model::from_json::<AuthPlatform>(json!({"enabled": null}))?;
    assert!(platform.is_enabled.is_unset());

    // Consuming it reports the missing field.
    let err = platform.is_enabled.require("enabled").unwrap_err();
    assert!(
        matches!(&err, wkt::CodecError::MissingRequiredField(f) if f == "enabled"),
        "{err:?}"
    );
    Ok(())
}

#[test]
fn duplicate_keys_are_rejected() {
    let input = r#"{"enabled": true, "enabled": false}"#;
    let got = serde_json::from_str::<AuthPlatform>(input);
    assert!(got.is_err(), "{got:?}");
}
