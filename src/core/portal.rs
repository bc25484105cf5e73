//! Self-service view of one volunteer's assignments.

use super::shift_view::{ShiftDetails, ShiftTiming};
use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, Volunteer};
use crate::store::Store;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortalEntry {
    pub assignment: Assignment,
    /// `None` when the shift was deleted after the assignment was made.
    pub shift: Option<ShiftDetails>,
}

impl PortalEntry {
    pub fn is_current(&self) -> bool {
        self.shift
            .as_ref()
            .is_some_and(|s| s.timing == ShiftTiming::Active)
    }

    pub fn is_upcoming(&self) -> bool {
        self.shift
            .as_ref()
            .is_some_and(|s| s.timing == ShiftTiming::Upcoming)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Portal {
    pub volunteer: Volunteer,
    pub entries: Vec<PortalEntry>,
}

impl Portal {
    /// Build the portal for the volunteer registered with `email`.
    pub fn for_email(store: &Store, email: &str, now: DateTime<Local>) -> AppResult<Self> {
        let volunteer = store
            .get_volunteer_by_email(email)
            .ok_or_else(|| AppError::not_found("volunteer", email))?;

        let entries = store
            .assignments_by_volunteer(volunteer.id)
            .into_iter()
            .map(|assignment| {
                let shift = store
                    .get_shift(assignment.shift_id)
                    .map(|s| ShiftDetails::build(store, s, now));
                PortalEntry { assignment, shift }
            })
            .collect();

        Ok(Self { volunteer, entries })
    }

    /// First assignment whose shift is running now.
    pub fn current(&self) -> Option<&PortalEntry> {
        self.entries.iter().find(|e| e.is_current())
    }

    pub fn upcoming(&self) -> Vec<&PortalEntry> {
        self.entries.iter().filter(|e| e.is_upcoming()).collect()
    }

    /// Initials shown next to the volunteer name ("Sarah Chen" -> "SC").
    pub fn initials(&self) -> String {
        self.volunteer
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
