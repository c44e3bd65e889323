//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::history::MemoryHistory;
use crate::core::route::{Fallback, RouteTable};
use crate::core::state::Navigator;
use crate::core::types::{Booking, Room};

/// A navigator on the default routes, starting at `start`.
pub fn navigator_at(start: &str, fallback: Fallback) -> Navigator {
    Navigator::new(
        Arc::new(RouteTable::default()),
        Box::new(MemoryHistory::new(start)),
        fallback,
    )
}

/// A navigator on the default routes, starting at `/`.
pub fn test_navigator() -> Navigator {
    navigator_at("/", Fallback::NotFound)
}

pub fn room(id: &str, name: &str, capacity: u32) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        active: None,
    }
}

pub fn booking(id: &str, room_id: &str, date: &str, time: &str) -> Booking {
    Booking {
        id: id.to_string(),
        room_id: room_id.to_string(),
        room_name: None,
        booked_by: "alice".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        created_at: format!("{date}T08:00:00Z"),
    }
}

/// Three rooms (one inactive) and three bookings, all consistent.
pub fn sample_catalog() -> Catalog {
    let mut lab = room("r2", "Lab", 10);
    lab.active = Some(false);
    let mut board = room("r3", "Board Room", 12);
    board.active = Some(true);

    let mut b2 = booking("b2", "r3", "2024-01-01", "14:00");
    b2.booked_by = "bob".to_string();
    b2.room_name = Some("Board Room".to_string());

    Catalog {
        rooms: vec![room("r1", "Room A", 4), lab, board],
        bookings: vec![
            booking("b1", "r1", "2024-01-02", "09:00"),
            b2,
            booking("b3", "r1", "2024-01-02", "15:30"),
        ],
    }
}
