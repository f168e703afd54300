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

//! The flattened result type handed back to callers.

use crate::model::{CreateRoomResponse, RoomModel, UpdateRoomResponse};
use azcore::error::Error;
use azcore::response::{Parts, Response};
use time::OffsetDateTime;

/// The outcome of a room operation, flattened for the caller.
///
/// Combines the fields of the room resource, the side-channel map of
/// rejected participants, and the transport metadata of the response into a
/// single value. Produced from a typed [Response] by the constructors below;
/// a pure data transformation, no I/O.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RoomResult {
    /// The unique room identifier.
    pub id: String,

    /// When the room was created.
    pub created_date_time: Option<OffsetDateTime>,

    /// The timestamp from which the room is open for joining.
    pub valid_from: Option<OffsetDateTime>,

    /// The timestamp after which the room can no longer be joined.
    pub valid_until: Option<OffsetDateTime>,

    /// The room participants, keyed by their raw identifier.
    pub participants: wkt::model::Map,

    /// Participants the service rejected, keyed by their raw identifier.
    pub invalid_participants: wkt::model::Map,

    /// The HTTP status code of the response this result was built from.
    pub http_status_code: u16,

    /// Whether the operation succeeded.
    pub successful: bool,

    /// The service-provided error message, for failed operations.
    pub error_message: Option<String>,
}

impl RoomResult {
    /// Flattens a create-room response envelope.
    ///
    /// Returns a deserialization error if the envelope carries no room, as a
    /// successful create response always does.
    pub fn from_create_response(response: Response<CreateRoomResponse>) -> azcore::Result<Self> {
        let (parts, body) = response.into_parts();
        let room = body
            .room
            .into_value()
            .ok_or_else(|| Error::from(wkt::CodecError::missing_required_field("room")))?;
        let invalid_participants = body.invalid_participants.into_value().unwrap_or_default();
        Ok(Self::flatten(room, invalid_participants, &parts))
    }

    /// Flattens an update-room response envelope.
    ///
    /// Returns a deserialization error if the envelope carries no room, as a
    /// successful update response always does.
    pub fn from_update_response(response: Response<UpdateRoomResponse>) -> azcore::Result<Self> {
        let (parts, body) = response.into_parts();
        let room = body
            .room
            .into_value()
            .ok_or_else(|| Error::from(wkt::CodecError::missing_required_field("room")))?;
        let invalid_participants = body.invalid_participants.into_value().unwrap_or_default();
        Ok(Self::flatten(room, invalid_participants, &parts))
    }

    /// Flattens a bare room resource, as returned by get-room.
    pub fn from_room(response: Response<RoomModel>) -> azcore::Result<Self> {
        let (parts, room) = response.into_parts();
        Ok(Self::flatten(room, wkt::model::Map::new(), &parts))
    }

    /// Builds a failed result from a service error.
    pub fn from_failure(error: &Error) -> Self {
        Self {
            http_status_code: error.http_status_code().unwrap_or_default(),
            successful: false,
            error_message: Some(error.message().unwrap_or("").to_string()),
            ..Self::default()
        }
    }

    fn flatten(room: RoomModel, invalid_participants: wkt::model::Map, parts: &Parts) -> Self {
        if !invalid_participants.is_empty() {
            tracing::debug!(
                count = invalid_participants.len(),
                "the service rejected some participants"
            );
        }
        Self {
            id: room.id.into_value().unwrap_or_default(),
            created_date_time: room.created_date_time.into_value(),
            valid_from: room.valid_from.into_value(),
            valid_until: room.valid_until.into_value(),
            participants: room.participants.into_value().unwrap_or_default(),
            invalid_participants,
            http_status_code: parts.status.as_u16(),
            successful: parts.status.is_success(),
            error_message: None,
        }
    }
}
