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

impl<'de> serde::de::Deserialize<'de> for crate::model::CreateRoomRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __valid_from,
            __valid_until,
            __participants,
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
                        formatter.write_str("a field name for CreateRoomRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "validFrom" => Ok(__FieldTag::__valid_from),
                            "validUntil" => Ok(__FieldTag::__valid_until),
                            "participants" => Ok(__FieldTag::__participants),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::CreateRoomRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct CreateRoomRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                struct __With(std::option::Option<time::OffsetDateTime>);
                impl<'de> serde::de::Deserialize<'de> for __With {
                    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                    where
                        D: serde::de::Deserializer<'de>,
                    {
                        serde_with::As::<std::option::Option<wkt::Rfc3339DateTime>>::deserialize(
                            deserializer,
                        )
                        .map(__With)
                    }
                }
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__valid_from => {
                            if !fields.insert(__FieldTag::__valid_from) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_from",
                                ));
                            }
                            result.valid_from = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__valid_until => {
                            if !fields.insert(__FieldTag::__valid_until) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_until",
                                ));
                            }
                            result.valid_until = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__participants => {
                            if !fields.insert(__FieldTag::__participants) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for participants",
                                ));
                            }
                            result.participants = map
                                .next_value::<std::option::Option<wkt::model::Map>>()?
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

impl serde::ser::Serialize for crate::model::CreateRoomRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        struct __With<'a>(&'a time::OffsetDateTime);
        impl<'a> serde::ser::Serialize for __With<'a> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serde_with::As::<wkt::Rfc3339DateTime>::serialize(self.0, serializer)
            }
        }
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.valid_from.value() {
            state.serialize_entry("validFrom", &__With(value))?;
        }
        if let Some(value) = self.valid_until.value() {
            state.serialize_entry("validUntil", &__With(value))?;
        }
        if let Some(value) = self.participants.value() {
            state.serialize_entry("participants", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::UpdateRoomRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __valid_from,
            __valid_until,
            __participants,
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
                        formatter.write_str("a field name for UpdateRoomRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "validFrom" => Ok(__FieldTag::__valid_from),
                            "validUntil" => Ok(__FieldTag::__valid_until),
                            "participants" => Ok(__FieldTag::__participants),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::UpdateRoomRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct UpdateRoomRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                struct __With(std::option::Option<time::OffsetDateTime>);
                impl<'de> serde::de::Deserialize<'de> for __With {
                    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                    where
                        D: serde::de::Deserializer<'de>,
                    {
                        serde_with::As::<std::option::Option<wkt::Rfc3339DateTime>>::deserialize(
                            deserializer,
                        )
                        .map(__With)
                    }
                }
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__valid_from => {
                            if !fields.insert(__FieldTag::__valid_from) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_from",
                                ));
                            }
                            result.valid_from = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__valid_until => {
                            if !fields.insert(__FieldTag::__valid_until) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_until",
                                ));
                            }
                            result.valid_until = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__participants => {
                            if !fields.insert(__FieldTag::__participants) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for participants",
                                ));
                            }
                            result.participants = map
                                .next_value::<std::option::Option<wkt::model::Map>>()?
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

impl serde::ser::Serialize for crate::model::UpdateRoomRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        struct __With<'a>(&'a time::OffsetDateTime);
        impl<'a> serde::ser::Serialize for __With<'a> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serde_with::As::<wkt::Rfc3339DateTime>::serialize(self.0, serializer)
            }
        }
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.valid_from.value() {
            state.serialize_entry("validFrom", &__With(value))?;
        }
        if let Some(value) = self.valid_until.value() {
            state.serialize_entry("validUntil", &__With(value))?;
        }
        if let Some(value) = self.participants.value() {
            state.serialize_entry("participants", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::RoomModel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __id,
            __created_date_time,
            __valid_from,
            __valid_until,
            __participants,
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
                        formatter.write_str("a field name for RoomModel")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "id" => Ok(__FieldTag::__id),
                            "createdDateTime" => Ok(__FieldTag::__created_date_time),
                            "validFrom" => Ok(__FieldTag::__valid_from),
                            "validUntil" => Ok(__FieldTag::__valid_until),
                            "participants" => Ok(__FieldTag::__participants),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::RoomModel;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct RoomModel")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                struct __With(std::option::Option<time::OffsetDateTime>);
                impl<'de> serde::de::Deserialize<'de> for __With {
                    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                    where
                        D: serde::de::Deserializer<'de>,
                    {
                        serde_with::As::<std::option::Option<wkt::Rfc3339DateTime>>::deserialize(
                            deserializer,
                        )
                        .map(__With)
                    }
                }
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__id => {
                            if !fields.insert(__FieldTag::__id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for id",
                                ));
                            }
                            result.id = map
                                .next_value::<std::option::Option<std::string::String>>()?
                                .into();
                        }
                        __FieldTag::__created_date_time => {
                            if !fields.insert(__FieldTag::__created_date_time) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for created_date_time",
                                ));
                            }
                            result.created_date_time = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__valid_from => {
                            if !fields.insert(__FieldTag::__valid_from) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_from",
                                ));
                            }
                            result.valid_from = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__valid_until => {
                            if !fields.insert(__FieldTag::__valid_until) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for valid_until",
                                ));
                            }
                            result.valid_until = map.next_value::<__With>()?.0.into();
                        }
                        __FieldTag::__participants => {
                            if !fields.insert(__FieldTag::__participants) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for participants",
                                ));
                            }
                            result.participants = map
                                .next_value::<std::option::Option<wkt::model::Map>>()?
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

impl serde::ser::Serialize for crate::model::RoomModel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        struct __With<'a>(&'a time::OffsetDateTime);
        impl<'a> serde::ser::Serialize for __With<'a> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serde_with::As::<wkt::Rfc3339DateTime>::serialize(self.0, serializer)
            }
        }
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.id.value() {
            state.serialize_entry("id", value)?;
        }
        if let Some(value) = self.created_date_time.value() {
            state.serialize_entry("createdDateTime", &__With(value))?;
        }
        if let Some(value) = self.valid_from.value() {
            state.serialize_entry("validFrom", &__With(value))?;
        }
        if let Some(value) = self.valid_until.value() {
            state.serialize_entry("validUntil", &__With(value))?;
        }
        if let Some(value) = self.participants.value() {
            state.serialize_entry("participants", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::CreateRoomResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __room,
            __invalid_participants,
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
                        formatter.write_str("a field name for CreateRoomResponse")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "room" => Ok(__FieldTag::__room),
                            "invalidParticipants" => Ok(__FieldTag::__invalid_participants),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::CreateRoomResponse;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct CreateRoomResponse")
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
                        __FieldTag::__room => {
                            if !fields.insert(__FieldTag::__room) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for room",
                                ));
                            }
                            result.room = map
                                .next_value::<std::option::Option<crate::model::RoomModel>>()?
                                .into();
                        }
                        __FieldTag::__invalid_participants => {
                            if !fields.insert(__FieldTag::__invalid_participants) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for invalid_participants",
                                ));
                            }
                            result.invalid_participants = map
                                .next_value::<std::option::Option<wkt::model::Map>>()?
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

impl serde::ser::Serialize for crate::model::CreateRoomResponse {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.room.value() {
            state.serialize_entry("room", value)?;
        }
        if let Some(value) = self.invalid_participants.value() {
            state.serialize_entry("invalidParticipants", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::UpdateRoomResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __room,
            __invalid_participants,
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
                        formatter.write_str("a field name for UpdateRoomResponse")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        use std::string::ToString;
                        match value {
                            "room" => Ok(__FieldTag::__room),
                            "invalidParticipants" => Ok(__FieldTag::__invalid_participants),
                            _ => Ok(__FieldTag::Unknown(value.to_string())),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::UpdateRoomResponse;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct UpdateRoomResponse")
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
                        __FieldTag::__room => {
                            if !fields.insert(__FieldTag::__room) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for room",
                                ));
                            }
                            result.room = map
                                .next_value::<std::option::Option<crate::model::RoomModel>>()?
                                .into();
                        }
                        __FieldTag::__invalid_participants => {
                            if !fields.insert(__FieldTag::__invalid_participants) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for invalid_participants",
                                ));
                            }
                            result.invalid_participants = map
                                .next_value::<std::option::Option<wkt::model::Map>>()?
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

impl serde::ser::Serialize for crate::model::UpdateRoomResponse {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.room.value() {
            state.serialize_entry("room", value)?;
        }
        if let Some(value) = self.invalid_participants.value() {
            state.serialize_entry("invalidParticipants", value)?;
        }
        if !self._unknown_fields.is_empty() {
            for (key, value) in self._unknown_fields.iter() {
                state.serialize_entry(key, &value)?;
            }
        }
        state.end()
    }
}
