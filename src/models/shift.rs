use super::{Id, Insert, Patch, Record, non_empty};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_VOLUNTEERS: u32 = 1;

/// A time-bounded, capacity-bounded instance of a duty within an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Id,
    pub event_id: Id,
    pub duty_id: Id,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub location: Option<String>,
    pub max_volunteers: u32,
}

impl Shift {
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    pub fn contains(&self, at: DateTime<Local>) -> bool {
        self.start_time <= at && at <= self.end_time
    }
}

impl Record for Shift {
    const KIND: &'static str = "shift";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewShift {
    pub event_id: Id,
    pub duty_id: Id,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub location: Option<String>,
    pub max_volunteers: Option<u32>,
}

impl NewShift {
    pub fn new(
        event_id: Id,
        duty_id: Id,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
    ) -> Self {
        Self {
            event_id,
            duty_id,
            start_time,
            end_time,
            location: None,
            max_volunteers: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_max_volunteers(mut self, max: u32) -> Self {
        self.max_volunteers = Some(max);
        self
    }
}

impl Insert for NewShift {
    type Output = Shift;

    /// A capacity of zero counts as omitted and falls back to one volunteer.
    fn into_record(self, id: Id) -> Shift {
        Shift {
            id,
            event_id: self.event_id,
            duty_id: self.duty_id,
            start_time: self.start_time,
            end_time: self.end_time,
            location: non_empty(self.location),
            max_volunteers: self
                .max_volunteers
                .filter(|m| *m > 0)
                .unwrap_or(DEFAULT_MAX_VOLUNTEERS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftPatch {
    pub event_id: Option<Id>,
    pub duty_id: Option<Id>,
    pub start_time: Option<DateTime<Local>>,
    pub end_time: Option<DateTime<Local>>,
    pub location: Option<Option<String>>,
    pub max_volunteers: Option<u32>,
}

impl Patch<Shift> for ShiftPatch {
    fn apply(self, shift: &mut Shift) {
        if let Some(event_id) = self.event_id {
            shift.event_id = event_id;
        }
        if let Some(duty_id) = self.duty_id {
            shift.duty_id = duty_id;
        }
        if let Some(start_time) = self.start_time {
            shift.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            shift.end_time = end_time;
        }
        if let Some(location) = self.location {
            shift.location = location;
        }
        if let Some(max_volunteers) = self.max_volunteers {
            shift.max_volunteers = max_volunteers;
        }
    }
}
