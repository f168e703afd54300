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

use azure_synapse_artifacts_v1::model::*;
use serde_json::json;

type Result = anyhow::Result<()>;

#[test]
fn wait_activity_dispatches_on_discriminator() -> Result {
    let input = json!({
        "name": "pause",
        "type": "Wait",
        "waitTimeInSeconds": 30
    });
    let got = serde_json::from_value::<Activity>(input)?;
    let Activity::Wait(wait) = &got else {
        panic!("expected a Wait activity, got {got:?}");
    };
    assert_eq!(wait.name.value().map(String::as_str), Some("pause"));
    assert_eq!(wait.wait_time_in_seconds.value(), Some(&30_i64));
    assert_eq!(got.activity_type(), "Wait");
    Ok(())
}

#[test]
fn until_activity_round_trips_with_nesting() -> Result {
    let input = json!({
        "name": "retry-loop",
        "type": "Until",
        "description": "poll until done",
        "dependsOn": [
            {"activity": "setup", "dependencyConditions": ["Succeeded"]}
        ],
        "userProperties": [
            {"name": "owner", "value": "data-team"}
        ],
        "expression": {"type": "Expression", "value": "@equals(1, 1)"},
        "timeout": "0.12:00:00",
        "activities": [
            {"name": "pause", "type": "Wait", "waitTimeInSeconds": 5}
        ]
    });
    let got = serde_json::from_value::<Activity>(input.clone())?;
    let Activity::Until(until) = &got else {
        panic!("expected an Until activity, got {got:?}");
    };
    assert_eq!(until.name.value().map(String::as_str), Some("retry-loop"));
    assert_eq!(
        until
            .expression
            .value()
            .and_then(|e| e.value.value())
            .map(String::as_str),
        Some("@equals(1, 1)")
    );
    let inner = until.activities.value().unwrap();
    assert_eq!(inner.len(), 1);
    assert!(matches!(inner[0], Activity::Wait(_)));

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn unknown_discriminator_falls_back_and_round_trips() -> Result {
    let input = json!({
        "name": "run-notebook",
        "type": "SynapseNotebook",
        "description": "runs a notebook",
        "dependsOn": [
            {"activity": "pause", "dependencyConditions": ["Completed"]}
        ],
        "notebook": {"referenceName": "nb1"}
    });
    let got = serde_json::from_value::<Activity>(input.clone())?;
    let Activity::Unknown(raw) = &got else {
        panic!("expected fallback for an unrecognized type, got {got:?}");
    };
    assert_eq!(
        raw.activity_type.value().map(String::as_str),
        Some("SynapseNotebook")
    );
    assert_eq!(raw.name.value().map(String::as_str), Some("run-notebook"));
    assert_eq!(
        raw.depends_on.value().map(Vec::len),
        Some(1),
        "base fields remain readable on the fallback"
    );
    assert_eq!(got.activity_type(), "SynapseNotebook");

    // The subtype-specific property survives the round trip.
    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn empty_discriminator_string_round_trips() -> Result {
    let input = json!({"name": "odd", "type": ""});
    let got = serde_json::from_value::<Activity>(input.clone())?;
    let Activity::Unknown(raw) = &got else {
        panic!("expected fallback for an empty type, got {got:?}");
    };
    assert_eq!(raw.activity_type.value().map(String::as_str), Some(""));
    assert_eq!(got.activity_type(), "");

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn base_accessors_work_across_variants() -> Result {
    let wait = Activity::from(
        WaitActivity::new()
            .set_name("w")
            .set_description("a wait")
            .set_wait_time_in_seconds(10),
    );
    assert_eq!(wait.name().value().map(String::as_str), Some("w"));
    assert_eq!(wait.description().value().map(String::as_str), Some("a wait"));
    assert_eq!(wait.activity_type(), "Wait");
    assert!(wait.depends_on().is_unset());

    let until = Activity::from(UntilActivity::new().set_name("u").set_depends_on([
        ActivityDependency::new()
            .set_activity("w")
            .set_dependency_conditions(["Succeeded"]),
    ]));
    assert_eq!(until.name().value().map(String::as_str), Some("u"));
    assert_eq!(until.depends_on().value().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn expression_always_writes_its_fixed_type() -> Result {
    let expr = Expression::new().set_value("@pipeline().parameters.x");
    let got = serde_json::to_value(&expr)?;
    assert_eq!(
        got,
        json!({"type": "Expression", "value": "@pipeline().parameters.x"})
    );
    Ok(())
}

#[test]
fn expression_value_is_required_lazily() -> Result {
    let expr = serde_json::from_value::<Expression>(json!({"type": "Expression"}))?;
    assert!(expr.value.is_unset());
    let err = expr.value.require("value").unwrap_err();
    assert!(
        err.to_string().contains("value"),
        "error should name the field: {err}"
    );
    Ok(())
}

#[test]
fn null_timeout_fails_at_serialization() {
    let until = UntilActivity::new()
        .set_name("bad")
        .set_timeout(serde_json::Value::Null);
    let err = serde_json::to_value(&until).unwrap_err();
    assert!(
        err.to_string().contains("timeout"),
        "error should name the offending field: {err}"
    );
}

#[test]
fn null_timeout_through_to_json_wraps_the_violation() {
    let until = UntilActivity::new()
        .set_name("bad")
        .set_timeout(serde_json::Value::Null);
    let err = wkt::model::to_json(&until).unwrap_err();
    assert!(
        matches!(err, wkt::CodecError::Serialization(_)),
        "violations raised inside a serializer arrive wrapped: {err:?}"
    );
    assert!(err.to_string().contains("not nullable"), "{err}");
}

#[test]
fn absent_timeout_is_simply_omitted() -> Result {
    let until = UntilActivity::new().set_name("ok");
    let got = serde_json::to_value(&until)?;
    assert_eq!(got, json!({"name": "ok", "type": "Until"}));
    Ok(())
}

#[test]
fn user_property_value_accepts_any_json() -> Result {
    let prop = serde_json::from_value::<UserProperty>(json!({
        "name": "retries",
        "value": {"max": 3, "backoff": [1, 2, 4]}
    }))?;
    assert_eq!(
        prop.value.value(),
        Some(&json!({"max": 3, "backoff": [1, 2, 4]}))
    );
    Ok(())
}
