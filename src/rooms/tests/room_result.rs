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

use azcore::response::{Parts, Response};
use azure_communication_rooms::model::*;
use azure_communication_rooms::result::RoomResult;
use serde_json::json;
use time::macros::datetime;

type Result = anyhow::Result<()>;

fn sample_room() -> RoomModel {
    RoomModel::new()
        .set_id("room-123")
        .set_created_date_time(datetime!(2023-05-11 00:00:00 UTC))
        .set_valid_from(datetime!(2023-05-11 09:00:00 UTC))
        .set_valid_until(datetime!(2023-05-12 09:00:00 UTC))
        .set_participants(
            json!({"8:acs:user-1": {"role": "Presenter"}})
                .as_object()
                .cloned()
                .unwrap(),
        )
}

#[test]
fn create_response_flattens_room_and_metadata() -> Result {
    let body = CreateRoomResponse::new().set_room(sample_room());
    let parts = Parts::new().set_status(http::StatusCode::CREATED);
    let got = RoomResult::from_create_response(Response::from_parts(parts, body))?;

    assert_eq!(got.id, "room-123");
    assert_eq!(got.created_date_time, Some(datetime!(2023-05-11 00:00:00 UTC)));
    assert_eq!(got.valid_from, Some(datetime!(2023-05-11 09:00:00 UTC)));
    assert_eq!(got.valid_until, Some(datetime!(2023-05-12 09:00:00 UTC)));
    assert_eq!(got.participants.len(), 1);
    assert!(got.invalid_participants.is_empty());
    assert_eq!(got.http_status_code, 201);
    assert!(got.successful);
    assert_eq!(got.error_message, None);
    Ok(())
}

#[test]
fn rejected_participants_surface_in_the_result() -> Result {
    let body = CreateRoomResponse::new().set_room(sample_room()).set_invalid_participants(
        json!({"bad:id": {"reason": "malformed identifier"}})
            .as_object()
            .cloned()
            .unwrap(),
    );
    let got = RoomResult::from_create_response(Response::from(body))?;
    assert_eq!(got.invalid_participants.len(), 1);
    assert!(got.invalid_participants.contains_key("bad:id"));
    assert!(got.successful);
    Ok(())
}

#[test]
fn update_response_flattens_like_create() -> Result {
    let body = UpdateRoomResponse::new().set_room(sample_room());
    let got = RoomResult::from_update_response(Response::from(body))?;
    assert_eq!(got.id, "room-123");
    assert_eq!(got.http_status_code, 200);
    assert!(got.successful);
    Ok(())
}

#[test]
fn bare_room_response_flattens() -> Result {
    let got = RoomResult::from_room(Response::from(sample_room()))?;
    assert_eq!(got.id, "room-123");
    assert!(got.invalid_participants.is_empty());
    Ok(())
}

#[test]
fn envelope_without_a_room_is_an_error() {
    let body = CreateRoomResponse::new();
    let err = RoomResult::from_create_response(Response::from(body)).unwrap_err();
    assert!(err.is_deserialization(), "{err:?}");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert!(
        source.as_deref().is_some_and(|s| s.contains("room")),
        "source should name the missing field: {source:?}"
    );
}

#[test]
fn failure_result_carries_the_service_details() {
    let error = azcore::error::Error::service(403, "invalid meeting join policy");
    let got = RoomResult::from_failure(&error);
    assert_eq!(got.http_status_code, 403);
    assert!(!got.successful);
    assert_eq!(
        got.error_message.as_deref(),
        Some("invalid meeting join policy")
    );
    assert!(got.id.is_empty());
}
