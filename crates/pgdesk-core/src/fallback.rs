// ── Built-in fallback datasets ──
//
// When a list fetch yields no usable data, the container substitutes a
// fixed demo dataset so the console is never blank. The error slot
// distinguishes the two paths that lead here: empty-success leaves it
// clear, a failed fetch records the failure. Tickets deliberately have
// no fallback ("No tickets yet" is a meaningful state).

use chrono::{NaiveDate, TimeZone, Utc};

use crate::model::{Notice, Room, RoomStatus, Tenant};

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1000,
            name: "A1".into(),
            sharing_type: "3-sharing".into(),
            capacity: 3,
            occupied: 3,
            price: 5500.0,
            status: RoomStatus::Full,
        },
        Room {
            id: 2000,
            name: "A2".into(),
            sharing_type: "3-sharing".into(),
            capacity: 3,
            occupied: 2,
            price: 5500.0,
            status: RoomStatus::Available,
        },
        Room {
            id: 3000,
            name: "B1".into(),
            sharing_type: "2-sharing".into(),
            capacity: 2,
            occupied: 2,
            price: 6500.0,
            status: RoomStatus::Full,
        },
        Room {
            id: 4000,
            name: "C1".into(),
            sharing_type: "4-sharing".into(),
            capacity: 4,
            occupied: 3,
            price: 5000.0,
            status: RoomStatus::Available,
        },
    ]
}

#[allow(clippy::unwrap_used)] // literal dates
pub fn tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            id: 1000,
            tenant_id: "T001".into(),
            name: "Rahul Sharma".into(),
            phone: "9XXXXXXXX1".into(),
            room: "A1".into(),
            check_in: NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(),
            due: 0.0,
        },
        Tenant {
            id: 2000,
            tenant_id: "T002".into(),
            name: "Pooja Rao".into(),
            phone: "9XXXXXXXX2".into(),
            room: "A2".into(),
            check_in: NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
            due: 1500.0,
        },
        Tenant {
            id: 3000,
            tenant_id: "T003".into(),
            name: "Venkatesh K".into(),
            phone: "9XXXXXXXX3".into(),
            room: "B1".into(),
            check_in: NaiveDate::from_ymd_opt(2025, 8, 28).unwrap(),
            due: 0.0,
        },
    ]
}

#[allow(clippy::unwrap_used)] // literal dates
pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            notice_id: "N011".into(),
            title: "Rent due by 5th Dec".into(),
            date: Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap(),
        },
        Notice {
            notice_id: "N012".into(),
            title: "Housekeeping hours updated".into(),
            date: Utc.with_ymd_and_hms(2025, 11, 18, 0, 0, 0).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_rooms_match_the_documented_demo_set() {
        let rooms = rooms();
        assert_eq!(rooms.len(), 4);
        let ids: Vec<i64> = rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1000, 2000, 3000, 4000]);
        let labels: Vec<&str> = rooms.iter().map(|r| r.status.label()).collect();
        assert_eq!(labels, ["Full", "Available", "Full", "Available"]);
    }
}
