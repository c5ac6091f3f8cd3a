use serde::{Serialize, Serializer};

use super::Entity;

/// Room occupancy status.
///
/// Wire form is the upper-case enum (`AVAILABLE` / `FULL`); the display
/// label is the case-folded form. Unknown wire values are classified as
/// [`RoomStatus::Unrecognized`] and pass through both directions
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Full,
    Unrecognized(String),
}

impl RoomStatus {
    /// Parse the wire enum. Accepts the display form as well, since
    /// older service builds echoed already-folded labels.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "AVAILABLE" | "Available" => Self::Available,
            "FULL" | "Full" => Self::Full,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// The upper-case wire form.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Available => "AVAILABLE".to_owned(),
            Self::Full => "FULL".to_owned(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    /// The display label ("Available" / "Full").
    pub fn label(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Full => "Full",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RoomStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A room, normalized to the UI shape.
///
/// `occupied <= capacity` is intended but not enforced client-side;
/// the rooms service owns that invariant.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Sharing category, e.g. `"3-sharing"`.
    pub sharing_type: String,
    pub capacity: u32,
    pub occupied: u32,
    pub price: f64,
    pub status: RoomStatus,
}

impl Entity for Room {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Operator input for creating or updating a room.
#[derive(Debug, Clone)]
pub struct RoomDraft {
    pub name: String,
    pub sharing_type: String,
    pub capacity: u32,
    pub occupied: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_over_the_wire_domain() {
        for wire in ["AVAILABLE", "FULL"] {
            assert_eq!(RoomStatus::from_wire(wire).to_wire(), wire);
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(RoomStatus::from_wire("AVAILABLE").label(), "Available");
        assert_eq!(RoomStatus::from_wire("FULL").label(), "Full");
    }

    #[test]
    fn unrecognized_status_passes_through_unchanged() {
        let status = RoomStatus::from_wire("RENOVATING");
        assert_eq!(status, RoomStatus::Unrecognized("RENOVATING".into()));
        assert_eq!(status.label(), "RENOVATING");
        assert_eq!(status.to_wire(), "RENOVATING");
    }
}
