use super::{Id, Insert, Patch, Record, non_empty};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance status of an assignment. Plain data: any value may follow
/// any other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Assigned,
    CheckedIn,
    Break,
    NoShow,
}

impl AssignmentStatus {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "assigned" => Some(Self::Assigned),
            "checked_in" => Some(Self::CheckedIn),
            "break" => Some(Self::Break),
            "no_show" => Some(Self::NoShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Assigned => "assigned",
            AssignmentStatus::CheckedIn => "checked_in",
            AssignmentStatus::Break => "break",
            AssignmentStatus::NoShow => "no_show",
        }
    }

    /// Checked in or on a break: the volunteer showed up.
    pub fn is_present(&self) -> bool {
        matches!(self, AssignmentStatus::CheckedIn | AssignmentStatus::Break)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Links one volunteer to one shift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Id,
    pub shift_id: Id,
    pub volunteer_id: Id,
    pub status: AssignmentStatus,
    pub check_in_time: Option<DateTime<Local>>,
    pub check_out_time: Option<DateTime<Local>>,
    pub notes: Option<String>,
}

impl Record for Assignment {
    const KIND: &'static str = "assignment";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub shift_id: Id,
    pub volunteer_id: Id,
    pub status: Option<AssignmentStatus>,
    pub check_in_time: Option<DateTime<Local>>,
    pub check_out_time: Option<DateTime<Local>>,
    pub notes: Option<String>,
}

impl NewAssignment {
    pub fn new(shift_id: Id, volunteer_id: Id) -> Self {
        Self {
            shift_id,
            volunteer_id,
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn checked_in_at(mut self, at: DateTime<Local>) -> Self {
        self.check_in_time = Some(at);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Insert for NewAssignment {
    type Output = Assignment;

    fn into_record(self, id: Id) -> Assignment {
        Assignment {
            id,
            shift_id: self.shift_id,
            volunteer_id: self.volunteer_id,
            status: self.status.unwrap_or_default(),
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
            notes: non_empty(self.notes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentPatch {
    pub shift_id: Option<Id>,
    pub volunteer_id: Option<Id>,
    pub status: Option<AssignmentStatus>,
    pub check_in_time: Option<Option<DateTime<Local>>>,
    pub check_out_time: Option<Option<DateTime<Local>>>,
    pub notes: Option<Option<String>>,
}

impl Patch<Assignment> for AssignmentPatch {
    fn apply(self, assignment: &mut Assignment) {
        if let Some(shift_id) = self.shift_id {
            assignment.shift_id = shift_id;
        }
        if let Some(volunteer_id) = self.volunteer_id {
            assignment.volunteer_id = volunteer_id;
        }
        if let Some(status) = self.status {
            assignment.status = status;
        }
        if let Some(check_in_time) = self.check_in_time {
            assignment.check_in_time = check_in_time;
        }
        if let Some(check_out_time) = self.check_out_time {
            assignment.check_out_time = check_out_time;
        }
        if let Some(notes) = self.notes {
            assignment.notes = notes;
        }
    }
}
