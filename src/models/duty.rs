use super::{Id, Insert, Patch, Record, non_empty, or_default_text};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DUTY_COLOR: &str = "blue";

/// A categorized task scoped to one event (e.g. "Registration").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Duty {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub event_id: Id,
    pub color: String,
}

impl Record for Duty {
    const KIND: &'static str = "duty";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDuty {
    pub name: String,
    pub description: Option<String>,
    pub event_id: Id,
    pub color: Option<String>,
}

impl NewDuty {
    pub fn new(name: impl Into<String>, event_id: Id) -> Self {
        Self {
            name: name.into(),
            description: None,
            event_id,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Insert for NewDuty {
    type Output = Duty;

    fn into_record(self, id: Id) -> Duty {
        Duty {
            id,
            name: self.name,
            description: non_empty(self.description),
            event_id: self.event_id,
            color: or_default_text(self.color, DEFAULT_DUTY_COLOR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub event_id: Option<Id>,
    pub color: Option<String>,
}

impl Patch<Duty> for DutyPatch {
    fn apply(self, duty: &mut Duty) {
        if let Some(name) = self.name {
            duty.name = name;
        }
        if let Some(description) = self.description {
            duty.description = description;
        }
        if let Some(event_id) = self.event_id {
            duty.event_id = event_id;
        }
        if let Some(color) = self.color {
            duty.color = color;
        }
    }
}
