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

//! Test serialization for DNS record set models.

use azure_dns_v1::model::*;
use serde_json::json;

#[test]
fn a_record_set_schema_key_order() -> anyhow::Result<()> {
    // Fields set in reverse schema order still serialize as TTL then records.
    let set = ARecordSet::new()
        .set_records([
            ARecordInfo::new().set_ipv4_address("10.10.0.1"),
            ARecordInfo::new().set_ipv4_address("10.10.0.2"),
        ])
        .set_ttl_in_seconds(3600_i64);
    let got = serde_json::to_string(&set)?;
    let want = concat!(
        r#"{"TTL":3600,"#,
        r#""records":[{"ipv4Address":"10.10.0.1"},{"ipv4Address":"10.10.0.2"}]}"#,
    );
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn a_record_set_round_trip() -> anyhow::Result<()> {
    let set = ARecordSet::new()
        .set_ttl_in_seconds(3600_i64)
        .set_records([
            ARecordInfo::new().set_ipv4_address("10.10.0.1"),
            ARecordInfo::new().set_ipv4_address("10.10.0.2"),
        ]);
    let value = wkt::model::to_json(&set)?;
    let back = wkt::model::from_json::<ARecordSet>(value)?;
    assert_eq!(back, set);
    Ok(())
}

#[test]
fn aaaa_record_set_round_trip() -> anyhow::Result<()> {
    let set = AaaaRecordSet::new()
        .set_ttl_in_seconds(3600_i64)
        .set_records([
            AaaaRecordInfo::new().set_ipv6_address("3f0d:8079:32a1:9c1d:dd7c:afc6:fc15:d55"),
            AaaaRecordInfo::new().set_ipv6_address("3f0d:8079:32a1:9c1d:dd7c:afc6:fc15:d66"),
        ]);
    let value = wkt::model::to_json(&set)?;
    assert_eq!(
        value,
        json!({
            "TTL": 3600,
            "records": [
                {"ipv6Address": "3f0d:8079:32a1:9c1d:dd7c:afc6:fc15:d55"},
                {"ipv6Address": "3f0d:8079:32a1:9c1d:dd7c:afc6:fc15:d66"},
            ],
        })
    );
    let back = wkt::model::from_json::<AaaaRecordSet>(value)?;
    assert_eq!(back, set);
    Ok(())
}

#[test]
fn mx_record_set_round_trip() -> anyhow::Result<()> {
    let set = MxRecordSet::new().set_ttl_in_seconds(7200_i64).set_records([
        MxRecordInfo::new()
            .set_preference(10)
            .set_exchange("mail.contoso.com"),
    ]);
    let value = wkt::model::to_json(&set)?;
    assert_eq!(
        value,
        json!({
            "TTL": 7200,
            "records": [{"preference": 10, "exchange": "mail.contoso.com"}],
        })
    );
    let back = wkt::model::from_json::<MxRecordSet>(value)?;
    assert_eq!(back, set);
    Ok(())
}

#[test]
fn unset_fields_are_omitted() -> anyhow::Result<()> {
    assert_eq!(wkt::model::to_json(&ARecordSet::new())?, json!({}));

    // An explicitly empty record list still serializes.
    let set = ARecordSet::new().set_records(Vec::<ARecordInfo>::new());
    assert_eq!(wkt::model::to_json(&set)?, json!({"records": []}));
    Ok(())
}

#[test]
fn unknown_keys_are_tolerated() -> anyhow::Result<()> {
    let set = wkt::model::from_json::<ARecordSet>(json!({
        "TTL": 300,
        "futureField": 1,
    }))?;
    assert_eq!(set.ttl_in_seconds.value(), Some(&300));
    assert!(set.records.is_unset());
    Ok(())
}
