//! # Catalog
//!
//! A read-only snapshot of rooms and bookings for the views to display.
//! Loaded once from a JSON file shaped like:
//!
//! ```json
//! { "rooms": [ { "id": "r1", "name": "Room A", "capacity": 4 } ],
//!   "bookings": [ { "id": "b1", "roomId": "r1", "bookedBy": "alice",
//!                   "date": "2024-01-01", "time": "09:00",
//!                   "createdAt": "2024-01-01T08:00:00Z" } ] }
//! ```
//!
//! Nothing is ever written back. Integrity problems (duplicate ids, bookings
//! pointing at rooms that do not exist) are logged, not rejected.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::types::{Booking, Room};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateRoomId(String),
    DuplicateBookingId(String),
    /// Booking id and the room id it references.
    DanglingRoomRef { booking_id: String, room_id: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DuplicateRoomId(id) => write!(f, "duplicate room id {id}"),
            IntegrityIssue::DuplicateBookingId(id) => write!(f, "duplicate booking id {id}"),
            IntegrityIssue::DanglingRoomRef {
                booking_id,
                room_id,
            } => write!(f, "booking {booking_id} references unknown room {room_id}"),
        }
    }
}

impl Catalog {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// A room with no `active` flag is offered.
    pub fn is_offered(room: &Room) -> bool {
        room.active.unwrap_or(true)
    }

    pub fn offered_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| Self::is_offered(r))
    }

    /// Display name for a booking's room: the cached name, else the current
    /// room name, else the raw room id.
    pub fn room_name<'a>(&'a self, booking: &'a Booking) -> &'a str {
        if let Some(name) = &booking.room_name {
            return name;
        }
        self.room(&booking.room_id)
            .map(|r| r.name.as_str())
            .unwrap_or(booking.room_id.as_str())
    }

    /// The first `limit` bookings on or after `from` (`YYYY-MM-DD`), ordered
    /// by date then time.
    pub fn upcoming(&self, from: &str, limit: usize) -> Vec<&Booking> {
        let mut sorted: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| b.date.as_str() >= from)
            .collect();
        sorted.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        sorted.truncate(limit);
        sorted
    }

    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.id.as_str()) {
                issues.push(IntegrityIssue::DuplicateRoomId(room.id.clone()));
            }
        }
        let room_ids = seen;

        let mut seen = HashSet::new();
        for booking in &self.bookings {
            if !seen.insert(booking.id.as_str()) {
                issues.push(IntegrityIssue::DuplicateBookingId(booking.id.clone()));
            }
            if !room_ids.contains(booking.room_id.as_str()) {
                issues.push(IntegrityIssue::DanglingRoomRef {
                    booking_id: booking.id.clone(),
                    room_id: booking.room_id.clone(),
                });
            }
        }

        issues
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog: Catalog = serde_json::from_str(&contents).map_err(CatalogError::Parse)?;
    info!(
        "Loaded {} rooms and {} bookings from {}",
        catalog.rooms.len(),
        catalog.bookings.len(),
        path.display()
    );
    for issue in catalog.integrity_issues() {
        warn!("Catalog: {}", issue);
    }
    Ok(catalog)
}
