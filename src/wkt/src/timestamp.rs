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

//! RFC 3339 timestamp encoding.
//!
//! The services represented here exchange timestamps as RFC 3339 strings,
//! e.g. `2022-02-25T04:59:22Z`. Models store them as
//! [time::OffsetDateTime]; this adapter provides the wire encoding for the
//! per-model serializers, via [serde_with::As].

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Encodes an [OffsetDateTime] as an RFC 3339 string.
///
/// # Example
/// ```
/// use azure_client_wkt::Rfc3339DateTime;
/// use time::macros::datetime;
/// let ts = datetime!(2022-02-25 04:59:22 UTC);
/// let json = serde_json::to_value(
///     serde_with::ser::SerializeAsWrap::<_, Rfc3339DateTime>::new(&ts)).unwrap();
/// assert_eq!(json, serde_json::json!("2022-02-25T04:59:22Z"));
/// ```
pub struct Rfc3339DateTime;

impl serde_with::SerializeAs<OffsetDateTime> for Rfc3339DateTime {
    fn serialize_as<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> serde_with::DeserializeAs<'de, OffsetDateTime> for Rfc3339DateTime {
    fn deserialize_as<D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = OffsetDateTime;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a timestamp in RFC 3339 format")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                OffsetDateTime::parse(value, &Rfc3339).map_err(E::custom)
            }
        }
        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    use time::macros::datetime;

    fn to_value(ts: &OffsetDateTime) -> serde_json::Value {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::new(&mut buf);
        Rfc3339DateTime::serialize_as(ts, &mut ser).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    fn from_value(value: serde_json::Value) -> Result<OffsetDateTime, serde_json::Error> {
        Rfc3339DateTime::deserialize_as(value)
    }

    #[test_case(datetime!(2022-02-25 04:59:22 UTC), "2022-02-25T04:59:22Z")]
    #[test_case(datetime!(2023-05-11 00:00:00 UTC), "2023-05-11T00:00:00Z")]
    fn format(ts: OffsetDateTime, want: &str) {
        assert_eq!(to_value(&ts), serde_json::json!(want));
    }

    #[test]
    fn round_trip() {
        let ts = datetime!(2022-02-25 04:59:22.5 UTC);
        let got = from_value(to_value(&ts)).unwrap();
        assert_eq!(got, ts);
    }

    #[test_case("not-a-timestamp")]
    #[test_case("2022-13-40T99:99:99Z")]
    fn parse_errors(input: &str) {
        let got = from_value(serde_json::json!(input));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn rejects_non_string() {
        let got = from_value(serde_json::json!(1645764562));
        assert!(got.is_err(), "{got:?}");
    }
}
