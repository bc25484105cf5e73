//! Shifts joined with their event, duty and assignment count.

use crate::models::{Id, Shift};
use crate::store::Store;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

pub const UNKNOWN_EVENT: &str = "Unknown Event";
pub const UNKNOWN_DUTY: &str = "Unknown Duty";

/// Where a shift sits relative to a given instant.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftTiming {
    Upcoming,
    Active,
    Completed,
}

impl ShiftTiming {
    pub fn at(shift: &Shift, now: DateTime<Local>) -> Self {
        if shift.contains(now) {
            ShiftTiming::Active
        } else if now < shift.start_time {
            ShiftTiming::Upcoming
        } else {
            ShiftTiming::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftTiming::Upcoming => "upcoming",
            ShiftTiming::Active => "active",
            ShiftTiming::Completed => "completed",
        }
    }
}

impl fmt::Display for ShiftTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDetails {
    #[serde(flatten)]
    pub shift: Shift,
    pub event_name: String,
    pub duty_name: String,
    pub assigned_volunteers: usize,
    pub timing: ShiftTiming,
}

impl ShiftDetails {
    /// Orphaned references resolve to "Unknown Event" / "Unknown Duty".
    pub fn build(store: &Store, shift: Shift, now: DateTime<Local>) -> Self {
        let event_name = store
            .get_event(shift.event_id)
            .map(|e| e.name)
            .unwrap_or_else(|| UNKNOWN_EVENT.to_string());
        let duty_name = store
            .get_duty(shift.duty_id)
            .map(|d| d.name)
            .unwrap_or_else(|| UNKNOWN_DUTY.to_string());
        let assigned_volunteers = store.assignments_by_shift(shift.id).len();
        let timing = ShiftTiming::at(&shift, now);

        Self {
            shift,
            event_name,
            duty_name,
            assigned_volunteers,
            timing,
        }
    }

    pub fn is_full(&self) -> bool {
        self.assigned_volunteers >= self.shift.max_volunteers as usize
    }
}

/// Details for every shift, or only those of `event_id`.
pub fn shift_details(
    store: &Store,
    event_id: Option<Id>,
    now: DateTime<Local>,
) -> Vec<ShiftDetails> {
    let shifts = match event_id {
        Some(id) => store.shifts_by_event(id),
        None => store.list_shifts(),
    };
    shifts
        .into_iter()
        .map(|s| ShiftDetails::build(store, s, now))
        .collect()
}
