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

// Code generated from the Security Center REST schema. Manual changes will
// be lost on regeneration.

use wkt::Optional;

/// The AWS organization membership of a connected account.
///
/// The wire representation carries an `organizationMembershipType` property
/// selecting the subtype. Membership types added by the service after this
/// crate was generated decode into [AwsOrganizationalInfo::Unknown]; the raw
/// discriminator remains accessible and the payload round-trips unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AwsOrganizationalInfo {
    /// `organizationMembershipType: "Organization"`.
    Organization(AwsOrganizationalInfoOrganization),
    /// `organizationMembershipType: "Member"`.
    Member(AwsOrganizationalInfoMember),
    /// Any membership type this crate does not know.
    Unknown(UnknownAwsOrganizationalInfo),
}

impl AwsOrganizationalInfo {
    /// The raw discriminator value.
    pub fn organization_membership_type(&self) -> &str {
        match self {
            Self::Organization(_) => "Organization",
            Self::Member(_) => "Member",
            Self::Unknown(info) => info
                .organization_membership_type
                .value()
                .map_or("", String::as_str),
        }
    }
}

impl wkt::model::Model for AwsOrganizationalInfo {
    fn type_name() -> &'static str {
        "AwsOrganizationalInfo"
    }
}

impl From<AwsOrganizationalInfoOrganization> for AwsOrganizationalInfo {
    fn from(value: AwsOrganizationalInfoOrganization) -> Self {
        Self::Organization(value)
    }
}

impl From<AwsOrganizationalInfoMember> for AwsOrganizationalInfo {
    fn from(value: AwsOrganizationalInfoMember) -> Self {
        Self::Member(value)
    }
}

/// Membership information for the management account of an AWS organization.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AwsOrganizationalInfoOrganization {
    /// The name of the onboarding stackset.
    pub stackset_name: Optional<String>,

    /// Account identifiers excluded from onboarding.
    pub excluded_account_ids: Optional<Vec<String>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl AwsOrganizationalInfoOrganization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [stackset_name][crate::model::AwsOrganizationalInfoOrganization::stackset_name].
    pub fn set_stackset_name<V: Into<String>>(mut self, v: V) -> Self {
        self.stackset_name = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [excluded_account_ids][crate::model::AwsOrganizationalInfoOrganization::excluded_account_ids].
    pub fn set_excluded_account_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.excluded_account_ids = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for AwsOrganizationalInfoOrganization {
    fn type_name() -> &'static str {
        "AwsOrganizationalInfoOrganization"
    }
}

impl std::fmt::Debug for AwsOrganizationalInfoOrganization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AwsOrganizationalInfoOrganization");
        debug_struct.field("stackset_name", &self.stackset_name);
        debug_struct.field("excluded_account_ids", &self.excluded_account_ids);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// Membership information for a member account of an AWS organization.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AwsOrganizationalInfoMember {
    /// The identifier of the account's parent in the organization hierarchy.
    pub parent_hierarchy_id: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl AwsOrganizationalInfoMember {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [parent_hierarchy_id][crate::model::AwsOrganizationalInfoMember::parent_hierarchy_id].
    pub fn set_parent_hierarchy_id<V: Into<String>>(mut self, v: V) -> Self {
        self.parent_hierarchy_id = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for AwsOrganizationalInfoMember {
    fn type_name() -> &'static str {
        "AwsOrganizationalInfoMember"
    }
}

impl std::fmt::Debug for AwsOrganizationalInfoMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AwsOrganizationalInfoMember");
        debug_struct.field("parent_hierarchy_id", &self.parent_hierarchy_id);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// Organization membership whose discriminator this crate does not know.
///
/// Every property other than the discriminator is retained in the
/// unknown-field map so the payload round-trips unchanged.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UnknownAwsOrganizationalInfo {
    /// The raw discriminator value from the payload, kept even when it is
    /// the empty string so the key round-trips.
    pub organization_membership_type: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UnknownAwsOrganizationalInfo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl wkt::model::Model for UnknownAwsOrganizationalInfo {
    fn type_name() -> &'static str {
        "UnknownAwsOrganizationalInfo"
    }
}

impl std::fmt::Debug for UnknownAwsOrganizationalInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UnknownAwsOrganizationalInfo");
        debug_struct.field(
            "organization_membership_type",
            &self.organization_membership_type,
        );
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
