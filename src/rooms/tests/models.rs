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

use azure_communication_rooms::model::*;
use serde_json::json;
use time::macros::datetime;

type Result = anyhow::Result<()>;

#[test]
fn create_request_serializes_timestamps_as_rfc3339() -> Result {
    let request = CreateRoomRequest::new()
        .set_valid_from(datetime!(2023-05-11 09:00:00 UTC))
        .set_valid_until(datetime!(2023-05-12 09:00:00 UTC));
    let got = serde_json::to_value(&request)?;
    assert_eq!(
        got,
        json!({
            "validFrom": "2023-05-11T09:00:00Z",
            "validUntil": "2023-05-12T09:00:00Z"
        })
    );
    Ok(())
}

#[test]
fn empty_update_request_serializes_to_an_empty_object() -> Result {
    let got = serde_json::to_value(UpdateRoomRequest::new())?;
    assert_eq!(got, json!({}));
    Ok(())
}

#[test]
fn room_model_round_trips() -> Result {
    let input = json!({
        "id": "room-9",
        "createdDateTime": "2023-05-10T23:59:59Z",
        "validFrom": "2023-05-11T09:00:00Z",
        "validUntil": "2023-05-12T09:00:00Z",
        "participants": {"8:acs:user-1": {"role": "Attendee"}}
    });
    let got = serde_json::from_value::<RoomModel>(input.clone())?;
    assert_eq!(
        got.created_date_time.value(),
        Some(&datetime!(2023-05-10 23:59:59 UTC))
    );
    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn malformed_timestamp_is_a_deserialize_error() {
    let got = serde_json::from_value::<RoomModel>(json!({
        "id": "room-9",
        "validFrom": "yesterday"
    }));
    assert!(got.is_err(), "{got:?}");
}

#[test]
fn unknown_keys_are_tolerated_and_preserved() -> Result {
    let input = json!({
        "room": {"id": "room-9"},
        "invalidParticipants": {},
        "futureField": 1
    });
    let got = serde_json::from_value::<CreateRoomResponse>(input.clone())?;
    assert_eq!(
        got.room.value().and_then(|r| r.id.value()).map(String::as_str),
        Some("room-9")
    );
    let output = serde_json::to_value(&got)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn absent_participants_differ_from_empty_participants() -> Result {
    let absent = serde_json::from_value::<UpdateRoomRequest>(json!({}))?;
    assert!(absent.participants.is_unset());

    let empty = UpdateRoomRequest::new().set_participants(serde_json::Map::new());
    let got = serde_json::to_value(&empty)?;
    assert_eq!(got, json!({"participants": {}}));
    Ok(())
}
