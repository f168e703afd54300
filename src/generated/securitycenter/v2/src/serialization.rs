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

impl<'de> serde::de::Deserialize<'de> for crate::model::AwsOrganizationalInfoOrganization {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __organization_membership_type,
            __stackset_name,
            __excluded_account_ids,
            Unknown(std::string::String),
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for AwsOrganizationalInfoOrganization")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "organizationMembershipType" => {
                                Ok(__FieldTag::__organization_membership_type)
                            }
                            "stacksetName" => Ok(__FieldTag::__stackset_name),
                            "excludedAccountIds" => Ok(__FieldTag::__excluded_account_ids),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::AwsOrganizationalInfoOrganization;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct AwsOrganizationalInfoOrganization")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__organization_membership_type => {
                            // The discriminator selected this type; not stored.
                            map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__stackset_name => {
                            if !fields.insert(__FieldTag::__stackset_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for stackset_name",
                                ));
                            }
                            result.stackset_name = map
                                .next_value::<std::option::Option<std::string::String>>()?
                                .into();
                        }
                        __FieldTag::__excluded_account_ids => {
                            if !fields.insert(__FieldTag::__excluded_account_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for excluded_account_ids",
                                ));
                            }
                            result.excluded_account_ids = map
                                .next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?
                                .into();
                        }
                        __FieldTag::Unknown(key) => {
                            let value = map.next_value::<serde_json::Value>()?;
                            result._unknown_fields.insert(key, value);
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::AwsOrganizationalInfoOrganization {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        state.serialize_entry("organizationMembershipType", "Organization")?;
        if let Some(value) = self.stackset_name.value() {
            state.serialize_entry("stacksetName", value)?;
        }
        if let Some(value) = self.excluded_account_ids.value() {
            state.serialize_entry("excludedAccountIds", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::AwsOrganizationalInfoMember {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __organization_membership_type,
            __parent_hierarchy_id,
            Unknown(std::string::String),
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for AwsOrganizationalInfoMember")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "organizationMembershipType" => {
                                Ok(__FieldTag::__organization_membership_type)
                            }
                            "parentHierarchyId" => Ok(__FieldTag::__parent_hierarchy_id),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::AwsOrganizationalInfoMember;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct AwsOrganizationalInfoMember")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__organization_membership_type => {
                            // The discriminator selected this type; not stored.
                            map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__parent_hierarchy_id => {
                            if !fields.insert(__FieldTag::__parent_hierarchy_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for parent_hierarchy_id",
                                ));
                            }
                            result.parent_hierarchy_id = map
                                .next_value::<std::option::Option<std::string::String>>()?
                                .into();
                        }
                        __FieldTag::Unknown(key) => {
                            let value = map.next_value::<serde_json::Value>()?;
                            result._unknown_fields.insert(key, value);
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::AwsOrganizationalInfoMember {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        state.serialize_entry("organizationMembershipType", "Member")?;
        if let Some(value) = self.parent_hierarchy_id.value() {
            state.serialize_entry("parentHierarchyId", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::UnknownAwsOrganizationalInfo {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __organization_membership_type,
            Unknown(std::string::String),
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for UnknownAwsOrganizationalInfo")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "organizationMembershipType" => {
                                Ok(__FieldTag::__organization_membership_type)
                            }
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::UnknownAwsOrganizationalInfo;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct UnknownAwsOrganizationalInfo")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__organization_membership_type => {
                            if !fields.insert(__FieldTag::__organization_membership_type) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for organization_membership_type",
                                ));
                            }
                            // The raw discriminator is retained.
                            result.organization_membership_type = map
                                .next_value::<std::option::Option<std::string::String>>()?
                                .into();
                        }
                        __FieldTag::Unknown(key) => {
                            let value = map.next_value::<serde_json::Value>()?;
                            result._unknown_fields.insert(key, value);
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::UnknownAwsOrganizationalInfo {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.organization_membership_type.value() {
            state.serialize_entry("organizationMembershipType", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::AwsOrganizationalInfo {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Deserialize, Error};
        // Buffer the object to inspect the discriminator before dispatch.
        let map = wkt::model::Map::deserialize(deserializer)?;
        let tag = map
            .get("organizationMembershipType")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let value = serde_json::Value::Object(map);
        match tag.as_str() {
            "Organization" => {
                serde_json::from_value::<crate::model::AwsOrganizationalInfoOrganization>(value)
                    .map(crate::model::AwsOrganizationalInfo::Organization)
                    .map_err(D::Error::custom)
            }
            "Member" => serde_json::from_value::<crate::model::AwsOrganizationalInfoMember>(value)
                .map(crate::model::AwsOrganizationalInfo::Member)
                .map_err(D::Error::custom),
            _ => serde_json::from_value::<crate::model::UnknownAwsOrganizationalInfo>(value)
                .map(crate::model::AwsOrganizationalInfo::Unknown)
                .map_err(D::Error::custom),
        }
    }
}

impl serde::ser::Serialize for crate::model::AwsOrganizationalInfo {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Organization(info) => info.serialize(serializer),
            Self::Member(info) => info.serialize(serializer),
            Self::Unknown(info) => info.serialize(serializer),
        }
    }
}
