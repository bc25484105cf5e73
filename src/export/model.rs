// src/export/model.rs

use crate::models::{Assignment, Duty, Event, Id, Shift, User, Volunteer};
use crate::store::Store;
use crate::utils::time::format_datetime;
use serde::Serialize;

/// Every collection of the store, in insertion order.
#[derive(Serialize, Clone, Debug)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub duties: Vec<Duty>,
    pub shifts: Vec<Shift>,
    pub volunteers: Vec<Volunteer>,
    pub assignments: Vec<Assignment>,
}

impl Snapshot {
    pub fn capture(store: &Store) -> Self {
        Self {
            users: store.list_users(),
            events: store.list_events(),
            duties: store.list_duties(),
            shifts: store.list_shifts(),
            volunteers: store.list_volunteers(),
            assignments: store.list_assignments(),
        }
    }
}

/// CSV header, in the field order of [`RosterRow`].
pub const ROSTER_HEADERS: [&str; 10] = [
    "assignment",
    "volunteer",
    "email",
    "event",
    "duty",
    "start",
    "end",
    "status",
    "check_in",
    "check_out",
];

/// One assignment flattened with its volunteer, shift, duty and event.
/// Orphaned references leave the matching cells empty.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub assignment: Id,
    pub volunteer: String,
    pub email: String,
    pub event: String,
    pub duty: String,
    pub start: String,
    pub end: String,
    pub status: String,
    pub check_in: String,
    pub check_out: String,
}

impl RosterRow {
    pub fn roster(store: &Store, date_format: &str) -> Vec<Self> {
        store
            .list_assignments()
            .into_iter()
            .map(|a| Self::build(store, a, date_format))
            .collect()
    }

    fn build(store: &Store, a: Assignment, fmt: &str) -> Self {
        let volunteer = store.get_volunteer(a.volunteer_id);
        let shift = store.get_shift(a.shift_id);
        let duty = shift.as_ref().and_then(|s| store.get_duty(s.duty_id));
        let event = shift.as_ref().and_then(|s| store.get_event(s.event_id));

        Self {
            assignment: a.id,
            volunteer: volunteer.as_ref().map(|v| v.name.clone()).unwrap_or_default(),
            email: volunteer.map(|v| v.email).unwrap_or_default(),
            event: event.map(|e| e.name).unwrap_or_default(),
            duty: duty.map(|d| d.name).unwrap_or_default(),
            start: shift
                .as_ref()
                .map(|s| format_datetime(&s.start_time, fmt))
                .unwrap_or_default(),
            end: shift
                .as_ref()
                .map(|s| format_datetime(&s.end_time, fmt))
                .unwrap_or_default(),
            status: a.status.as_str().to_string(),
            check_in: a
                .check_in_time
                .map(|t| format_datetime(&t, fmt))
                .unwrap_or_default(),
            check_out: a
                .check_out_time
                .map(|t| format_datetime(&t, fmt))
                .unwrap_or_default(),
        }
    }
}
