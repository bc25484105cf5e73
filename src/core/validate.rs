//! Input validation run before any write reaches the store.
//!
//! The store accepts whatever it is given; these checks reject empty
//! required fields, unknown references, inverted time windows and duplicate
//! usernames/emails.

use crate::errors::{AppError, AppResult};
use crate::models::{
    AssignmentPatch, DutyPatch, EventPatch, Id, NewAssignment, NewDuty, NewEvent, NewShift,
    NewUser, NewVolunteer, ShiftPatch, UserPatch, VolunteerPatch,
};
use crate::store::Store;
use chrono::{DateTime, Local};

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_window(start: DateTime<Local>, end: DateTime<Local>) -> AppResult<()> {
    if end <= start {
        return Err(AppError::Validation(format!(
            "end ({}) must be after start ({})",
            end.to_rfc3339(),
            start.to_rfc3339()
        )));
    }
    Ok(())
}

fn require_email(email: &str) -> AppResult<()> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
    if !valid {
        return Err(AppError::Validation(format!("invalid email '{email}'")));
    }
    Ok(())
}

fn require_user(store: &Store, id: Id) -> AppResult<()> {
    store
        .get_user(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("user", id))
}

fn require_event(store: &Store, id: Id) -> AppResult<()> {
    store
        .get_event(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("event", id))
}

fn require_shift(store: &Store, id: Id) -> AppResult<()> {
    store
        .get_shift(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("shift", id))
}

fn require_volunteer(store: &Store, id: Id) -> AppResult<()> {
    store
        .get_volunteer(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("volunteer", id))
}

/// The duty must exist and belong to `event_id`.
fn require_duty_of_event(store: &Store, duty_id: Id, event_id: Id) -> AppResult<()> {
    let duty = store
        .get_duty(duty_id)
        .ok_or_else(|| AppError::not_found("duty", duty_id))?;
    if duty.event_id != event_id {
        return Err(AppError::Validation(format!(
            "duty #{} belongs to event #{}, not event #{}",
            duty_id, duty.event_id, event_id
        )));
    }
    Ok(())
}

fn require_capacity(max: Option<u32>) -> AppResult<()> {
    if max == Some(0) {
        return Err(AppError::Validation(
            "max volunteers must be at least 1".into(),
        ));
    }
    Ok(())
}

// ---------------------------
// Users
// ---------------------------
pub fn new_user(store: &Store, input: &NewUser) -> AppResult<()> {
    require("username", &input.username)?;
    require("password", &input.password)?;
    if store.get_user_by_username(&input.username).is_some() {
        return Err(AppError::duplicate("user", "username", &input.username));
    }
    Ok(())
}

pub fn user_patch(store: &Store, id: Id, patch: &UserPatch) -> AppResult<()> {
    require_user(store, id)?;
    if let Some(username) = &patch.username {
        require("username", username)?;
        if store
            .get_user_by_username(username)
            .is_some_and(|u| u.id != id)
        {
            return Err(AppError::duplicate("user", "username", username));
        }
    }
    if let Some(password) = &patch.password {
        require("password", password)?;
    }
    Ok(())
}

// ---------------------------
// Events
// ---------------------------
pub fn new_event(store: &Store, input: &NewEvent) -> AppResult<()> {
    require("name", &input.name)?;
    require("location", &input.location)?;
    require_window(input.start_date, input.end_date)?;
    require_user(store, input.organizer_id)
}

pub fn event_patch(store: &Store, id: Id, patch: &EventPatch) -> AppResult<()> {
    let current = store
        .get_event(id)
        .ok_or_else(|| AppError::not_found("event", id))?;

    if let Some(name) = &patch.name {
        require("name", name)?;
    }
    if let Some(location) = &patch.location {
        require("location", location)?;
    }
    if let Some(organizer_id) = patch.organizer_id {
        require_user(store, organizer_id)?;
    }
    require_window(
        patch.start_date.unwrap_or(current.start_date),
        patch.end_date.unwrap_or(current.end_date),
    )
}

// ---------------------------
// Duties
// ---------------------------
pub fn new_duty(store: &Store, input: &NewDuty) -> AppResult<()> {
    require("name", &input.name)?;
    require_event(store, input.event_id)
}

pub fn duty_patch(store: &Store, id: Id, patch: &DutyPatch) -> AppResult<()> {
    if store.get_duty(id).is_none() {
        return Err(AppError::not_found("duty", id));
    }
    if let Some(name) = &patch.name {
        require("name", name)?;
    }
    if let Some(event_id) = patch.event_id {
        require_event(store, event_id)?;
    }
    Ok(())
}

// ---------------------------
// Shifts
// ---------------------------
pub fn new_shift(store: &Store, input: &NewShift) -> AppResult<()> {
    require_event(store, input.event_id)?;
    require_duty_of_event(store, input.duty_id, input.event_id)?;
    require_window(input.start_time, input.end_time)?;
    require_capacity(input.max_volunteers)
}

pub fn shift_patch(store: &Store, id: Id, patch: &ShiftPatch) -> AppResult<()> {
    let current = store
        .get_shift(id)
        .ok_or_else(|| AppError::not_found("shift", id))?;

    let event_id = patch.event_id.unwrap_or(current.event_id);
    let duty_id = patch.duty_id.unwrap_or(current.duty_id);
    if patch.event_id.is_some() {
        require_event(store, event_id)?;
    }
    if patch.event_id.is_some() || patch.duty_id.is_some() {
        require_duty_of_event(store, duty_id, event_id)?;
    }
    require_window(
        patch.start_time.unwrap_or(current.start_time),
        patch.end_time.unwrap_or(current.end_time),
    )?;
    require_capacity(patch.max_volunteers)
}

// ---------------------------
// Volunteers
// ---------------------------
pub fn new_volunteer(store: &Store, input: &NewVolunteer) -> AppResult<()> {
    require("name", &input.name)?;
    require_email(&input.email)?;
    if store.get_volunteer_by_email(&input.email).is_some() {
        return Err(AppError::duplicate("volunteer", "email", &input.email));
    }
    Ok(())
}

pub fn volunteer_patch(store: &Store, id: Id, patch: &VolunteerPatch) -> AppResult<()> {
    require_volunteer(store, id)?;
    if let Some(name) = &patch.name {
        require("name", name)?;
    }
    if let Some(email) = &patch.email {
        require_email(email)?;
        if store
            .get_volunteer_by_email(email)
            .is_some_and(|v| v.id != id)
        {
            return Err(AppError::duplicate("volunteer", "email", email));
        }
    }
    Ok(())
}

// ---------------------------
// Assignments
// ---------------------------
pub fn new_assignment(store: &Store, input: &NewAssignment) -> AppResult<()> {
    require_shift(store, input.shift_id)?;
    require_volunteer(store, input.volunteer_id)
}

pub fn assignment_patch(store: &Store, id: Id, patch: &AssignmentPatch) -> AppResult<()> {
    if store.get_assignment(id).is_none() {
        return Err(AppError::not_found("assignment", id));
    }
    if let Some(shift_id) = patch.shift_id {
        require_shift(store, shift_id)?;
    }
    if let Some(volunteer_id) = patch.volunteer_id {
        require_volunteer(store, volunteer_id)?;
    }
    Ok(())
}

/// Over-capacity assignments are allowed; callers may warn about them.
/// Returns `(assigned, max)` when the shift is already at or above capacity.
pub fn shift_is_full(store: &Store, shift_id: Id) -> Option<(usize, u32)> {
    let shift = store.get_shift(shift_id)?;
    let assigned = store.assignments_by_shift(shift_id).len();
    (assigned >= shift.max_volunteers as usize).then_some((assigned, shift.max_volunteers))
}
