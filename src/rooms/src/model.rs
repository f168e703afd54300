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

use time::OffsetDateTime;
use wkt::Optional;

/// Request payload for creating a room.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateRoomRequest {
    /// The timestamp from which the room is open for joining.
    pub valid_from: Optional<OffsetDateTime>,

    /// The timestamp after which the room can no longer be joined.
    pub valid_until: Optional<OffsetDateTime>,

    /// Participants to invite, keyed by their raw identifier.
    pub participants: Optional<wkt::model::Map>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl CreateRoomRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [valid_from][crate::model::CreateRoomRequest::valid_from].
    pub fn set_valid_from<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_from = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [valid_until][crate::model::CreateRoomRequest::valid_until].
    pub fn set_valid_until<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_until = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [participants][crate::model::CreateRoomRequest::participants].
    pub fn set_participants<V: Into<wkt::model::Map>>(mut self, v: V) -> Self {
        self.participants = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for CreateRoomRequest {
    fn type_name() -> &'static str {
        "CreateRoomRequest"
    }
}

impl std::fmt::Debug for CreateRoomRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateRoomRequest");
        debug_struct.field("valid_from", &self.valid_from);
        debug_struct.field("valid_until", &self.valid_until);
        debug_struct.field("participants", &self.participants);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// Request payload for updating a room.
///
/// Only set fields appear on the wire; the service leaves the rest of the
/// room unchanged.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateRoomRequest {
    /// The timestamp from which the room is open for joining.
    pub valid_from: Optional<OffsetDateTime>,

    /// The timestamp after which the room can no longer be joined.
    pub valid_until: Optional<OffsetDateTime>,

    /// The full replacement participant set, keyed by raw identifier.
    pub participants: Optional<wkt::model::Map>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UpdateRoomRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [valid_from][crate::model::UpdateRoomRequest::valid_from].
    pub fn set_valid_from<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_from = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [valid_until][crate::model::UpdateRoomRequest::valid_until].
    pub fn set_valid_until<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_until = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [participants][crate::model::UpdateRoomRequest::participants].
    pub fn set_participants<V: Into<wkt::model::Map>>(mut self, v: V) -> Self {
        self.participants = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for UpdateRoomRequest {
    fn type_name() -> &'static str {
        "UpdateRoomRequest"
    }
}

impl std::fmt::Debug for UpdateRoomRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateRoomRequest");
        debug_struct.field("valid_from", &self.valid_from);
        debug_struct.field("valid_until", &self.valid_until);
        debug_struct.field("participants", &self.participants);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A room resource as returned by the service.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RoomModel {
    /// The unique room identifier.
    pub id: Optional<String>,

    /// When the room was created.
    pub created_date_time: Optional<OffsetDateTime>,

    /// The timestamp from which the room is open for joining.
    pub valid_from: Optional<OffsetDateTime>,

    /// The timestamp after which the room can no longer be joined.
    pub valid_until: Optional<OffsetDateTime>,

    /// The room participants, keyed by their raw identifier.
    pub participants: Optional<wkt::model::Map>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl RoomModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][crate::model::RoomModel::id].
    pub fn set_id<V: Into<String>>(mut self, v: V) -> Self {
        self.id = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [created_date_time][crate::model::RoomModel::created_date_time].
    pub fn set_created_date_time<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.created_date_time = Optional::set(v.into());
        self
    }

    /// Sets the value of [valid_from][crate::model::RoomModel::valid_from].
    pub fn set_valid_from<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_from = Optional::set(v.into());
        self
    }

    /// Sets the value of [valid_until][crate::model::RoomModel::valid_until].
    pub fn set_valid_until<V: Into<OffsetDateTime>>(mut self, v: V) -> Self {
        self.valid_until = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [participants][crate::model::RoomModel::participants].
    pub fn set_participants<V: Into<wkt::model::Map>>(mut self, v: V) -> Self {
        self.participants = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for RoomModel {
    fn type_name() -> &'static str {
        "RoomModel"
    }
}

impl std::fmt::Debug for RoomModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RoomModel");
        debug_struct.field("id", &self.id);
        debug_struct.field("created_date_time", &self.created_date_time);
        debug_struct.field("valid_from", &self.valid_from);
        debug_struct.field("valid_until", &self.valid_until);
        debug_struct.field("participants", &self.participants);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// Response envelope for a create-room call.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateRoomResponse {
    /// The created room.
    pub room: Optional<RoomModel>,

    /// Participants the service rejected, keyed by their raw identifier.
    pub invalid_participants: Optional<wkt::model::Map>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl CreateRoomResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [room][crate::model::CreateRoomResponse::room].
    pub fn set_room<V: Into<RoomModel>>(mut self, v: V) -> Self {
        self.room = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [invalid_participants][crate::model::CreateRoomResponse::invalid_participants].
    pub fn set_invalid_participants<V: Into<wkt::model::Map>>(mut self, v: V) -> Self {
        self.invalid_participants = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for CreateRoomResponse {
    fn type_name() -> &'static str {
        "CreateRoomResponse"
    }
}

impl std::fmt::Debug for CreateRoomResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateRoomResponse");
        debug_struct.field("room", &self.room);
        debug_struct.field("invalid_participants", &self.invalid_participants);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// Response envelope for an update-room call.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateRoomResponse {
    /// The room after the update.
    pub room: Optional<RoomModel>,

    /// Participants the service rejected, keyed by their raw identifier.
    pub invalid_participants: Optional<wkt::model::Map>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UpdateRoomResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [room][crate::model::UpdateRoomResponse::room].
    pub fn set_room<V: Into<RoomModel>>(mut self, v: V) -> Self {
        self.room = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [invalid_participants][crate::model::UpdateRoomResponse::invalid_participants].
    pub fn set_invalid_participants<V: Into<wkt::model::Map>>(mut self, v: V) -> Self {
        self.invalid_participants = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for UpdateRoomResponse {
    fn type_name() -> &'static str {
        "UpdateRoomResponse"
    }
}

impl std::fmt::Debug for UpdateRoomResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateRoomResponse");
        debug_struct.field("room", &self.room);
        debug_struct.field("invalid_participants", &self.invalid_participants);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
