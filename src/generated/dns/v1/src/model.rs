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

// Code generated from the DNS REST schema. Manual changes will be lost on
// regeneration.

use wkt::Optional;

/// An A record.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ARecordInfo {
    /// The IPv4 address of this A record.
    pub ipv4_address: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl ARecordInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [ipv4_address][crate::model::ARecordInfo::ipv4_address].
    pub fn set_ipv4_address<V: Into<String>>(mut self, v: V) -> Self {
        self.ipv4_address = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for ARecordInfo {
    fn type_name() -> &'static str {
        "ARecordInfo"
    }
}

impl std::fmt::Debug for ARecordInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ARecordInfo");
        debug_struct.field("ipv4_address", &self.ipv4_address);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// An AAAA record.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AaaaRecordInfo {
    /// The IPv6 address of this AAAA record.
    pub ipv6_address: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl AaaaRecordInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [ipv6_address][crate::model::AaaaRecordInfo::ipv6_address].
    pub fn set_ipv6_address<V: Into<String>>(mut self, v: V) -> Self {
        self.ipv6_address = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for AaaaRecordInfo {
    fn type_name() -> &'static str {
        "AaaaRecordInfo"
    }
}

impl std::fmt::Debug for AaaaRecordInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AaaaRecordInfo");
        debug_struct.field("ipv6_address", &self.ipv6_address);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// An MX record.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct MxRecordInfo {
    /// The preference value for this MX record.
    pub preference: Optional<i32>,

    /// The domain name of the mail host for this MX record.
    pub exchange: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl MxRecordInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [preference][crate::model::MxRecordInfo::preference].
    pub fn set_preference<V: Into<i32>>(mut self, v: V) -> Self {
        self.preference = Optional::set(v.into());
        self
    }

    /// Sets the value of [exchange][crate::model::MxRecordInfo::exchange].
    pub fn set_exchange<V: Into<String>>(mut self, v: V) -> Self {
        self.exchange = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for MxRecordInfo {
    fn type_name() -> &'static str {
        "MxRecordInfo"
    }
}

impl std::fmt::Debug for MxRecordInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MxRecordInfo");
        debug_struct.field("preference", &self.preference);
        debug_struct.field("exchange", &self.exchange);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A record set of type A.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ARecordSet {
    /// The TTL (time-to-live) of the records in the record set, in seconds.
    pub ttl_in_seconds: Optional<i64>,

    /// The list of A records in the record set.
    pub records: Optional<Vec<ARecordInfo>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl ARecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [ttl_in_seconds][crate::model::ARecordSet::ttl_in_seconds].
    pub fn set_ttl_in_seconds<V: Into<i64>>(mut self, v: V) -> Self {
        self.ttl_in_seconds = Optional::set(v.into());
        self
    }

    /// Sets the value of [records][crate::model::ARecordSet::records].
    pub fn set_records<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ARecordInfo>,
    {
        self.records = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for ARecordSet {
    fn type_name() -> &'static str {
        "ARecordSet"
    }
}

impl std::fmt::Debug for ARecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ARecordSet");
        debug_struct.field("ttl_in_seconds", &self.ttl_in_seconds);
        debug_struct.field("records", &self.records);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A record set of type AAAA.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AaaaRecordSet {
    /// The TTL (time-to-live) of the records in the record set, in seconds.
    pub ttl_in_seconds: Optional<i64>,

    /// The list of AAAA records in the record set.
    pub records: Optional<Vec<AaaaRecordInfo>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl AaaaRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [ttl_in_seconds][crate::model::AaaaRecordSet::ttl_in_seconds].
    pub fn set_ttl_in_seconds<V: Into<i64>>(mut self, v: V) -> Self {
        self.ttl_in_seconds = Optional::set(v.into());
        self
    }

    /// Sets the value of [records][crate::model::AaaaRecordSet::records].
    pub fn set_records<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AaaaRecordInfo>,
    {
        self.records = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for AaaaRecordSet {
    fn type_name() -> &'static str {
        "AaaaRecordSet"
    }
}

impl std::fmt::Debug for AaaaRecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AaaaRecordSet");
        debug_struct.field("ttl_in_seconds", &self.ttl_in_seconds);
        debug_struct.field("records", &self.records);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A record set of type MX.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct MxRecordSet {
    /// The TTL (time-to-live) of the records in the record set, in seconds.
    pub ttl_in_seconds: Optional<i64>,

    /// The list of MX records in the record set.
    pub records: Optional<Vec<MxRecordInfo>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl MxRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [ttl_in_seconds][crate::model::MxRecordSet::ttl_in_seconds].
    pub fn set_ttl_in_seconds<V: Into<i64>>(mut self, v: V) -> Self {
        self.ttl_in_seconds = Optional::set(v.into());
        self
    }

    /// Sets the value of [records][crate::model::MxRecordSet::records].
    pub fn set_records<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<MxRecordInfo>,
    {
        self.records = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for MxRecordSet {
    fn type_name() -> &'static str {
        "MxRecordSet"
    }
}

impl std::fmt::Debug for MxRecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MxRecordSet");
        debug_struct.field("ttl_in_seconds", &self.ttl_in_seconds);
        debug_struct.field("records", &self.records);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
