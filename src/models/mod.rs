//! Entity records of the coordination store.
//!
//! Each entity comes in three shapes:
//! - the stored record (`Event`), always fully materialized,
//! - the insert record (`NewEvent`), where optional fields may be omitted,
//! - the patch (`EventPatch`), where every field is optional and nullable
//!   fields use `Option<Option<T>>` so that `Some(None)` clears them.

pub mod assignment;
pub mod duty;
pub mod event;
pub mod shift;
pub mod user;
pub mod volunteer;

pub use assignment::{Assignment, AssignmentPatch, AssignmentStatus, NewAssignment};
pub use duty::{Duty, DutyPatch, NewDuty};
pub use event::{Event, EventPatch, EventStatus, NewEvent};
pub use shift::{NewShift, Shift, ShiftPatch};
pub use user::{NewUser, Role, User, UserPatch};
pub use volunteer::{NewVolunteer, Volunteer, VolunteerPatch};

/// Process-unique handle of a stored row.
pub type Id = i32;

/// A stored row addressable by its handle.
pub trait Record: Clone {
    /// Human readable collection name, used in log lines and errors.
    const KIND: &'static str;

    fn id(&self) -> Id;
}

/// An insert record: turns into the full row once a handle is allocated,
/// filling every omitted optional field with its documented default.
pub trait Insert {
    type Output: Record;

    fn into_record(self, id: Id) -> Self::Output;
}

/// A typed partial update. Only supplied fields overwrite the target; the
/// handle is never touched.
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

/// Empty strings count as "not supplied" for optional text fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Like [`non_empty`], but falls back to a default instead of `None`.
pub(crate) fn or_default_text(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
