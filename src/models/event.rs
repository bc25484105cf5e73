use super::{Id, Insert, Patch, Record, non_empty};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scheduled" => Some(Self::Scheduled),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EventStatus::Active)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    pub location: String,
    pub organizer_id: Id,
    pub status: EventStatus,
}

impl Event {
    pub fn duration_minutes(&self) -> i64 {
        (self.end_date - self.start_date).num_minutes()
    }
}

impl Record for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    pub location: String,
    pub organizer_id: Id,
    pub status: Option<EventStatus>,
}

impl NewEvent {
    pub fn new(
        name: impl Into<String>,
        start_date: DateTime<Local>,
        end_date: DateTime<Local>,
        location: impl Into<String>,
        organizer_id: Id,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            start_date,
            end_date,
            location: location.into(),
            organizer_id,
            status: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Insert for NewEvent {
    type Output = Event;

    fn into_record(self, id: Id) -> Event {
        Event {
            id,
            name: self.name,
            description: non_empty(self.description),
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            organizer_id: self.organizer_id,
            status: self.status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<DateTime<Local>>,
    pub end_date: Option<DateTime<Local>>,
    pub location: Option<String>,
    pub organizer_id: Option<Id>,
    pub status: Option<EventStatus>,
}

impl Patch<Event> for EventPatch {
    fn apply(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            event.end_date = end_date;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(organizer_id) = self.organizer_id {
            event.organizer_id = organizer_id;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
    }
}
