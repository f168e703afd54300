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

use azure_securitycenter_v2::model::*;
use serde_json::json;

type Result = anyhow::Result<()>;

#[test]
fn organization_variant_round_trips() -> Result {
    let input = json!({
        "organizationMembershipType": "Organization",
        "stacksetName": "onboarding-stackset",
        "excludedAccountIds": ["111111111111", "222222222222"]
    });
    let got = serde_json::from_value::<AwsOrganizationalInfo>(input.clone())?;
    let AwsOrganizationalInfo::Organization(org) = &got else {
        panic!("expected the Organization variant, got {got:?}");
    };
    assert_eq!(
        org.stackset_name.value().map(String::as_str),
        Some("onboarding-stackset")
    );
    assert_eq!(org.excluded_account_ids.value().map(Vec::len), Some(2));
    assert_eq!(got.organization_membership_type(), "Organization");

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn member_variant_round_trips() -> Result {
    let input = json!({
        "organizationMembershipType": "Member",
        "parentHierarchyId": "ou-ab12-cdef3456"
    });
    let got = serde_json::from_value::<AwsOrganizationalInfo>(input.clone())?;
    let AwsOrganizationalInfo::Member(member) = &got else {
        panic!("expected the Member variant, got {got:?}");
    };
    assert_eq!(
        member.parent_hierarchy_id.value().map(String::as_str),
        Some("ou-ab12-cdef3456")
    );

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn unknown_membership_type_falls_back_and_round_trips() -> Result {
    let input = json!({
        "organizationMembershipType": "Delegated",
        "delegatedAdminAccountId": "333333333333"
    });
    let got = serde_json::from_value::<AwsOrganizationalInfo>(input.clone())?;
    let AwsOrganizationalInfo::Unknown(raw) = &got else {
        panic!("expected fallback for an unrecognized membership type, got {got:?}");
    };
    assert_eq!(
        raw.organization_membership_type.value().map(String::as_str),
        Some("Delegated")
    );
    assert_eq!(got.organization_membership_type(), "Delegated");

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn missing_discriminator_falls_back() -> Result {
    let got = serde_json::from_value::<AwsOrganizationalInfo>(json!({
        "stacksetName": "orphan"
    }))?;
    let AwsOrganizationalInfo::Unknown(raw) = &got else {
        panic!("expected fallback when the discriminator is absent, got {got:?}");
    };
    assert!(raw.organization_membership_type.is_unset());
    Ok(())
}

#[test]
fn empty_discriminator_string_round_trips() -> Result {
    let input = json!({
        "organizationMembershipType": "",
        "stacksetName": "odd"
    });
    let got = serde_json::from_value::<AwsOrganizationalInfo>(input.clone())?;
    let AwsOrganizationalInfo::Unknown(raw) = &got else {
        panic!("expected fallback for an empty membership type, got {got:?}");
    };
    assert_eq!(
        raw.organization_membership_type.value().map(String::as_str),
        Some("")
    );

    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn organization_builder_writes_discriminator_first() -> Result {
    let info = AwsOrganizationalInfo::from(
        AwsOrganizationalInfoOrganization::new().set_stackset_name("s"),
    );
    let got = serde_json::to_string(&info)?;
    assert_eq!(
        got,
        r#"{"organizationMembershipType":"Organization","stacksetName":"s"}"#
    );
    Ok(())
}

#[test]
fn unknown_keys_on_known_variants_are_preserved() -> Result {
    let input = json!({
        "organizationMembershipType": "Member",
        "parentHierarchyId": "ou-1",
        "futureField": {"nested": true}
    });
    let got = serde_json::from_value::<AwsOrganizationalInfo>(input.clone())?;
    assert!(matches!(got, AwsOrganizationalInfo::Member(_)));
    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}
