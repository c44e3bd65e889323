//! # Domain Types
//!
//! The two record shapes shared between the views and whatever data source
//! feeds them. They are plain data: no validation, no defaults, no behavior.
//!
//! Field names on the wire are camelCase and must stay exactly as they are,
//! since any backend speaking to this client serializes them verbatim:
//!
//! ```text
//! Room    { id, name, capacity, active? }
//! Booking { id, roomId, roomName?, bookedBy, date, time, createdAt }
//! ```
//!
//! Optional fields are omitted on output when `None`. Defaults (a room with no
//! `active` flag is offered for booking) belong to the consumer, see
//! [`Catalog::is_offered`](crate::core::catalog::Catalog::is_offered).

use serde::{Deserialize, Serialize};

/// A bookable physical space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Seating limit. Unsigned, so negative values fail to decode.
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A reservation of a room by a requester.
///
/// `date` is `YYYY-MM-DD`, `time` is 24h `HH:MM` and `created_at` is RFC 3339.
/// They are kept as strings; only display code parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Lookup key into the rooms, not ownership.
    pub room_id: String,
    /// Room name cached at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    pub booked_by: String,
    pub date: String,
    pub time: String,
    pub created_at: String,
}
