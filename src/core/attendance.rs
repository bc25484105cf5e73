//! Attendance workflow on top of assignment updates.
//!
//! No transition is refused: status is plain data and every helper simply
//! writes the fields it owns.

use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, AssignmentPatch, AssignmentStatus, Id};
use crate::store::Store;
use chrono::{DateTime, Local};

fn apply(store: &mut Store, id: Id, patch: AssignmentPatch) -> AppResult<Assignment> {
    store
        .update_assignment(id, patch)
        .ok_or_else(|| AppError::not_found("assignment", id))
}

/// Mark the volunteer as checked in at `at`.
pub fn check_in(store: &mut Store, id: Id, at: DateTime<Local>) -> AppResult<Assignment> {
    apply(
        store,
        id,
        AssignmentPatch {
            status: Some(AssignmentStatus::CheckedIn),
            check_in_time: Some(Some(at)),
            ..Default::default()
        },
    )
}

/// Record the check-out time; the status is left as it is.
pub fn check_out(store: &mut Store, id: Id, at: DateTime<Local>) -> AppResult<Assignment> {
    apply(
        store,
        id,
        AssignmentPatch {
            check_out_time: Some(Some(at)),
            ..Default::default()
        },
    )
}

pub fn start_break(store: &mut Store, id: Id) -> AppResult<Assignment> {
    apply(
        store,
        id,
        AssignmentPatch {
            status: Some(AssignmentStatus::Break),
            ..Default::default()
        },
    )
}

pub fn mark_no_show(store: &mut Store, id: Id) -> AppResult<Assignment> {
    apply(
        store,
        id,
        AssignmentPatch {
            status: Some(AssignmentStatus::NoShow),
            ..Default::default()
        },
    )
}

/// Minutes between check-in and check-out, when both are recorded.
pub fn worked_minutes(assignment: &Assignment) -> Option<i64> {
    match (assignment.check_in_time, assignment.check_out_time) {
        (Some(start), Some(end)) => Some((end - start).num_minutes()),
        _ => None,
    }
}
