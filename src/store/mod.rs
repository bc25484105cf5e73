//! Volunteer coordination store.
//!
//! An in-memory repository of six collections (users, events, duties, shifts,
//! volunteers, assignments). The store is constructed once by the
//! composition root and handed to request handlers as `&mut Store`.
//!
//! Nothing here validates input or fails: unknown handles yield `None` or
//! `false`, references between rows are plain handles, and deletes never
//! cascade to dependent rows.

pub mod log;
pub mod seed;
pub mod table;

use crate::models::{
    Assignment, AssignmentPatch, Duty, DutyPatch, Event, EventPatch, Id, NewAssignment, NewDuty,
    NewEvent, NewShift, NewUser, NewVolunteer, Record, Shift, ShiftPatch, User, UserPatch,
    Volunteer, VolunteerPatch,
};
use chrono::{DateTime, Local};
use self::log::{LogEntry, OpLog};
use self::table::Table;

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Table<User>,
    events: Table<Event>,
    duties: Table<Duty>,
    shifts: Table<Shift>,
    volunteers: Table<Volunteer>,
    assignments: Table<Assignment>,
    log: OpLog,
    quiet: bool,
}

impl Store {
    /// Build a store pre-populated with the demonstration dataset,
    /// with time windows relative to the current instant.
    pub fn new() -> Self {
        Self::seeded_at(Local::now())
    }

    /// Build a store seeded relative to `now`.
    pub fn seeded_at(now: DateTime<Local>) -> Self {
        let mut store = Self::empty();
        store.quiet = true;
        let summary = seed::seed(&mut store, now);
        store.quiet = false;
        store.log.record("init", "seed", &summary);
        store
    }

    /// Build a store with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    /// Append an entry for an operation performed outside the store
    /// (exports, imports) so it shows up next to the mutations.
    pub fn note(&mut self, operation: &str, target: &str, message: &str) {
        self.log.record(operation, target, message);
    }

    fn record<T: Record>(&mut self, operation: &str, id: Id, message: String) {
        if self.quiet {
            return;
        }
        let target = format!("{} #{}", T::KIND, id);
        self.log.record(operation, &target, &message);
    }

    fn record_delete<T: Record>(&mut self, id: Id, removed: bool) -> bool {
        if removed {
            self.record::<T>("del", id, format!("{} #{} deleted", T::KIND, id));
        }
        removed
    }

    // ---------------------------
    // Users
    // ---------------------------
    pub fn create_user(&mut self, input: NewUser) -> User {
        let user = self.users.create(input);
        self.record::<User>(
            "add",
            user.id,
            format!("user '{}' ({})", user.username, user.role),
        );
        user
    }

    pub fn get_user(&self, id: Id) -> Option<User> {
        self.users.get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|u| u.username == username)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn update_user(&mut self, id: Id, patch: UserPatch) -> Option<User> {
        let user = self.users.update(id, patch)?;
        self.record::<User>("edit", id, format!("user '{}' updated", user.username));
        Some(user)
    }

    pub fn delete_user(&mut self, id: Id) -> bool {
        let removed = self.users.delete(id);
        self.record_delete::<User>(id, removed)
    }

    // ---------------------------
    // Events
    // ---------------------------
    pub fn create_event(&mut self, input: NewEvent) -> Event {
        let event = self.events.create(input);
        self.record::<Event>(
            "add",
            event.id,
            format!("event '{}' ({})", event.name, event.status),
        );
        event
    }

    pub fn get_event(&self, id: Id) -> Option<Event> {
        self.events.get(id)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.list()
    }

    pub fn update_event(&mut self, id: Id, patch: EventPatch) -> Option<Event> {
        let event = self.events.update(id, patch)?;
        self.record::<Event>("edit", id, format!("event '{}' updated", event.name));
        Some(event)
    }

    pub fn delete_event(&mut self, id: Id) -> bool {
        let removed = self.events.delete(id);
        self.record_delete::<Event>(id, removed)
    }

    // ---------------------------
    // Duties
    // ---------------------------
    pub fn create_duty(&mut self, input: NewDuty) -> Duty {
        let duty = self.duties.create(input);
        self.record::<Duty>(
            "add",
            duty.id,
            format!("duty '{}' for event #{}", duty.name, duty.event_id),
        );
        duty
    }

    pub fn get_duty(&self, id: Id) -> Option<Duty> {
        self.duties.get(id)
    }

    pub fn list_duties(&self) -> Vec<Duty> {
        self.duties.list()
    }

    pub fn duties_by_event(&self, event_id: Id) -> Vec<Duty> {
        self.duties.filter(|d| d.event_id == event_id)
    }

    pub fn update_duty(&mut self, id: Id, patch: DutyPatch) -> Option<Duty> {
        let duty = self.duties.update(id, patch)?;
        self.record::<Duty>("edit", id, format!("duty '{}' updated", duty.name));
        Some(duty)
    }

    pub fn delete_duty(&mut self, id: Id) -> bool {
        let removed = self.duties.delete(id);
        self.record_delete::<Duty>(id, removed)
    }

    // ---------------------------
    // Shifts
    // ---------------------------
    pub fn create_shift(&mut self, input: NewShift) -> Shift {
        let shift = self.shifts.create(input);
        self.record::<Shift>(
            "add",
            shift.id,
            format!(
                "shift for duty #{} of event #{} (max {})",
                shift.duty_id, shift.event_id, shift.max_volunteers
            ),
        );
        shift
    }

    pub fn get_shift(&self, id: Id) -> Option<Shift> {
        self.shifts.get(id)
    }

    pub fn list_shifts(&self) -> Vec<Shift> {
        self.shifts.list()
    }

    pub fn shifts_by_event(&self, event_id: Id) -> Vec<Shift> {
        self.shifts.filter(|s| s.event_id == event_id)
    }

    pub fn update_shift(&mut self, id: Id, patch: ShiftPatch) -> Option<Shift> {
        let shift = self.shifts.update(id, patch)?;
        self.record::<Shift>("edit", id, format!("shift #{} updated", shift.id));
        Some(shift)
    }

    pub fn delete_shift(&mut self, id: Id) -> bool {
        let removed = self.shifts.delete(id);
        self.record_delete::<Shift>(id, removed)
    }

    // ---------------------------
    // Volunteers
    // ---------------------------
    pub fn create_volunteer(&mut self, input: NewVolunteer) -> Volunteer {
        let volunteer = self.volunteers.create(input);
        self.record::<Volunteer>(
            "add",
            volunteer.id,
            format!("volunteer '{}' <{}>", volunteer.name, volunteer.email),
        );
        volunteer
    }

    pub fn get_volunteer(&self, id: Id) -> Option<Volunteer> {
        self.volunteers.get(id)
    }

    pub fn get_volunteer_by_email(&self, email: &str) -> Option<Volunteer> {
        self.volunteers.find(|v| v.email == email)
    }

    pub fn list_volunteers(&self) -> Vec<Volunteer> {
        self.volunteers.list()
    }

    pub fn update_volunteer(&mut self, id: Id, patch: VolunteerPatch) -> Option<Volunteer> {
        let volunteer = self.volunteers.update(id, patch)?;
        self.record::<Volunteer>(
            "edit",
            id,
            format!("volunteer '{}' updated", volunteer.name),
        );
        Some(volunteer)
    }

    pub fn delete_volunteer(&mut self, id: Id) -> bool {
        let removed = self.volunteers.delete(id);
        self.record_delete::<Volunteer>(id, removed)
    }

    // ---------------------------
    // Assignments
    // ---------------------------
    pub fn create_assignment(&mut self, input: NewAssignment) -> Assignment {
        let assignment = self.assignments.create(input);
        self.record::<Assignment>(
            "add",
            assignment.id,
            format!(
                "volunteer #{} on shift #{} ({})",
                assignment.volunteer_id, assignment.shift_id, assignment.status
            ),
        );
        assignment
    }

    pub fn get_assignment(&self, id: Id) -> Option<Assignment> {
        self.assignments.get(id)
    }

    pub fn list_assignments(&self) -> Vec<Assignment> {
        self.assignments.list()
    }

    pub fn assignments_by_volunteer(&self, volunteer_id: Id) -> Vec<Assignment> {
        self.assignments.filter(|a| a.volunteer_id == volunteer_id)
    }

    pub fn assignments_by_shift(&self, shift_id: Id) -> Vec<Assignment> {
        self.assignments.filter(|a| a.shift_id == shift_id)
    }

    pub fn update_assignment(&mut self, id: Id, patch: AssignmentPatch) -> Option<Assignment> {
        let assignment = self.assignments.update(id, patch)?;
        self.record::<Assignment>(
            "edit",
            id,
            format!("assignment #{} is now {}", assignment.id, assignment.status),
        );
        Some(assignment)
    }

    pub fn delete_assignment(&mut self, id: Id) -> bool {
        let removed = self.assignments.delete(id);
        self.record_delete::<Assignment>(id, removed)
    }
}
