use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::Entity;

/// Ticket priority. Wire form is upper-case (`LOW|MEDIUM|HIGH`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl TicketPriority {
    /// Parse either the wire form or the display label.
    pub fn from_wire(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Unrecognized(raw.to_owned()),
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            Self::Low => "LOW".to_owned(),
            Self::Medium => "MEDIUM".to_owned(),
            Self::High => "HIGH".to_owned(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// Ticket workflow status. Wire form is upper-case with underscores
/// (`OPEN|IN_PROGRESS|CLOSED`); display form is `Open` / `In Progress`
/// / `Closed`. Any status may move to any other -- there is no
/// client-side transition guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
    Unrecognized(String),
}

impl TicketStatus {
    /// Parse either the wire form or the display label
    /// ("In Progress" folds to `IN_PROGRESS`).
    pub fn from_wire(raw: &str) -> Self {
        match raw.to_uppercase().replace(' ', "_").as_str() {
            "OPEN" => Self::Open,
            "IN_PROGRESS" => Self::InProgress,
            "CLOSED" => Self::Closed,
            _ => Self::Unrecognized(raw.to_owned()),
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            Self::Open => "OPEN".to_owned(),
            Self::InProgress => "IN_PROGRESS".to_owned(),
            Self::Closed => "CLOSED".to_owned(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TicketPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl Serialize for TicketStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A maintenance ticket, normalized to the UI shape.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: i64,
    /// Server-generated display id (e.g. `"TCK-4821"`); never identity.
    pub ticket_id: String,
    pub title: String,
    /// Free-text room reference.
    pub room: String,
    pub priority: TicketPriority,
    pub description: String,
    pub status: TicketStatus,
    /// Server-assigned, immutable after creation.
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Ticket {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Operator input for raising a ticket.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub room: String,
    pub priority: TicketPriority,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_over_the_wire_domain() {
        for wire in ["OPEN", "IN_PROGRESS", "CLOSED"] {
            assert_eq!(TicketStatus::from_wire(wire).to_wire(), wire);
        }
    }

    #[test]
    fn priority_round_trips_over_the_wire_domain() {
        for wire in ["LOW", "MEDIUM", "HIGH"] {
            assert_eq!(TicketPriority::from_wire(wire).to_wire(), wire);
        }
    }

    #[test]
    fn display_labels_fold_case_and_underscores() {
        assert_eq!(TicketStatus::from_wire("IN_PROGRESS").label(), "In Progress");
        assert_eq!(TicketStatus::from_wire("In Progress").to_wire(), "IN_PROGRESS");
        assert_eq!(TicketPriority::from_wire("HIGH").label(), "High");
    }

    #[test]
    fn unrecognized_values_pass_through_unchanged() {
        let status = TicketStatus::from_wire("ESCALATED");
        assert_eq!(status.to_wire(), "ESCALATED");
        assert_eq!(status.label(), "ESCALATED");

        let priority = TicketPriority::from_wire("URGENT");
        assert_eq!(priority.to_wire(), "URGENT");
    }
}
