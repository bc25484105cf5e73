mod common;

use chrono::Duration;
use common::noon;
use rvolunteer::models::{
    AssignmentPatch, AssignmentStatus, DutyPatch, EventPatch, EventStatus, NewAssignment,
    NewDuty, NewEvent, NewShift, NewUser, NewVolunteer, Role, ShiftPatch, UserPatch,
    VolunteerPatch,
};
use rvolunteer::store::Store;

/// Empty store with one organizer, one event and one duty.
fn base() -> (Store, i32, i32) {
    let mut store = Store::empty();
    let org = store.create_user(NewUser::new("org", "pw").with_role(Role::Organizer));
    let event = store.create_event(NewEvent::new(
        "Gala",
        noon(),
        noon() + Duration::hours(5),
        "Town Hall",
        org.id,
    ));
    let duty = store.create_duty(NewDuty::new("Bar", event.id));
    (store, event.id, duty.id)
}

#[test]
fn test_seed_dataset() {
    let store = Store::seeded_at(noon());

    let users = store.list_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[0].role, Role::Organizer);

    let events = store.list_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Charity Fundraiser");
    assert_eq!(events[0].status, EventStatus::Active);
    assert_eq!(events[0].start_date, noon());
    assert_eq!(events[0].end_date, noon() + Duration::hours(8));
    assert_eq!(events[0].organizer_id, users[0].id);

    let duties = store.list_duties();
    let names: Vec<_> = duties.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Registration", "Setup Crew", "Food Service"]);
    let colors: Vec<_> = duties.iter().map(|d| d.color.as_str()).collect();
    assert_eq!(colors, ["blue", "green", "purple"]);

    let shifts = store.list_shifts();
    let caps: Vec<_> = shifts.iter().map(|s| s.max_volunteers).collect();
    assert_eq!(caps, [2, 4, 3]);
    assert_eq!(shifts[1].start_time, noon() - Duration::hours(3));

    let volunteers = store.list_volunteers();
    assert_eq!(volunteers.len(), 3);
    assert_eq!(volunteers[0].email, "sarah.chen@email.com");
    assert_eq!(
        volunteers[1].skills,
        Some(vec!["setup".to_string(), "manual_labor".to_string()])
    );

    let statuses: Vec<_> = store.list_assignments().iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        [
            AssignmentStatus::CheckedIn,
            AssignmentStatus::NoShow,
            AssignmentStatus::Break
        ]
    );
    assert_eq!(
        store.list_assignments()[0].check_in_time,
        Some(noon() - Duration::minutes(30))
    );
}

#[test]
fn test_seed_writes_single_log_entry() {
    let store = Store::seeded_at(noon());
    assert_eq!(store.log().len(), 1);
    assert_eq!(store.log()[0].operation, "init");

    let empty = Store::empty();
    assert!(empty.log().is_empty());
    assert!(empty.list_events().is_empty());
}

#[test]
fn test_handles_increase_across_deletes() {
    let mut store = Store::empty();
    let a = store.create_volunteer(NewVolunteer::new("A", "a@x.org"));
    let b = store.create_volunteer(NewVolunteer::new("B", "b@x.org"));
    assert!(store.delete_volunteer(b.id));
    let c = store.create_volunteer(NewVolunteer::new("C", "c@x.org"));

    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(c.id, 3);
}

#[test]
fn test_handles_are_per_collection() {
    let (mut store, event_id, duty_id) = base();
    let shift = store.create_shift(NewShift::new(
        event_id,
        duty_id,
        noon(),
        noon() + Duration::hours(1),
    ));
    assert_eq!(event_id, 1);
    assert_eq!(duty_id, 1);
    assert_eq!(shift.id, 1);
}

#[test]
fn test_create_then_get_round_trip() {
    let (mut store, event_id, duty_id) = base();

    let shift = store.create_shift(
        NewShift::new(event_id, duty_id, noon(), noon() + Duration::hours(2))
            .with_location("Lobby")
            .with_max_volunteers(5),
    );
    assert_eq!(store.get_shift(shift.id), Some(shift.clone()));

    let volunteer = store.create_volunteer(
        NewVolunteer::new("Lee", "lee@x.org")
            .with_phone("555")
            .with_skills(["first_aid"]),
    );
    assert_eq!(store.get_volunteer(volunteer.id), Some(volunteer));
}

#[test]
fn test_defaults_applied_on_create() {
    let (mut store, event_id, duty_id) = base();

    let event = store.get_event(event_id).unwrap();
    assert_eq!(event.status, EventStatus::Scheduled);
    assert_eq!(event.description, None);

    let duty = store.get_duty(duty_id).unwrap();
    assert_eq!(duty.color, "blue");

    let shift = store.create_shift(NewShift::new(
        event_id,
        duty_id,
        noon(),
        noon() + Duration::hours(1),
    ));
    assert_eq!(shift.max_volunteers, 1);
    assert_eq!(shift.location, None);

    let zero = store.create_shift(
        NewShift::new(event_id, duty_id, noon(), noon() + Duration::hours(1))
            .with_max_volunteers(0),
    );
    assert_eq!(zero.max_volunteers, 1);

    let user = store.create_user(NewUser::new("vol", "pw"));
    assert_eq!(user.role, Role::Volunteer);

    let volunteer = store.create_volunteer(NewVolunteer::new("No Phone", "np@x.org"));
    let assignment = store.create_assignment(NewAssignment::new(shift.id, volunteer.id));
    assert_eq!(assignment.status, AssignmentStatus::Assigned);
    assert_eq!(assignment.check_in_time, None);
    assert_eq!(assignment.check_out_time, None);
    assert_eq!(assignment.notes, None);
}

#[test]
fn test_empty_text_counts_as_absent() {
    let (mut store, event_id, _) = base();

    let duty = store.create_duty(NewDuty::new("Coat Check", event_id).with_color(""));
    assert_eq!(duty.color, "blue");

    let volunteer = store.create_volunteer(NewVolunteer::new("Kim", "kim@x.org").with_phone(""));
    assert_eq!(volunteer.phone, None);
}

#[test]
fn test_partial_update_preserves_untouched_fields() {
    let (mut store, event_id, _) = base();
    let before = store.get_event(event_id).unwrap();

    let after = store
        .update_event(
            event_id,
            EventPatch {
                location: Some("Riverside Park".into()),
                status: Some(EventStatus::Active),
                ..Default::default()
            },
        )
        .unwrap();

    let mut expected = before;
    expected.location = "Riverside Park".into();
    expected.status = EventStatus::Active;
    assert_eq!(after, expected);
    assert_eq!(store.get_event(event_id), Some(expected));
}

#[test]
fn test_update_nullable_fields() {
    let mut store = Store::empty();
    let v = store.create_volunteer(
        NewVolunteer::new("Sam", "sam@x.org")
            .with_phone("555-0101")
            .with_skills(["setup"]),
    );

    let cleared = store
        .update_volunteer(
            v.id,
            VolunteerPatch {
                phone: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.phone, None);
    assert_eq!(cleared.skills, Some(vec!["setup".to_string()]));

    let untouched = store
        .update_volunteer(v.id, VolunteerPatch::default())
        .unwrap();
    assert_eq!(untouched, cleared);
}

#[test]
fn test_update_never_changes_handle() {
    let (mut store, event_id, duty_id) = base();
    let updated = store
        .update_duty(
            duty_id,
            DutyPatch {
                name: Some("Drinks".into()),
                event_id: Some(event_id),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.id, duty_id);
    assert_eq!(updated.name, "Drinks");
}

#[test]
fn test_update_missing_returns_none() {
    let mut store = Store::empty();
    assert!(store.update_user(7, UserPatch::default()).is_none());
    assert!(store.update_shift(7, ShiftPatch::default()).is_none());
    assert!(
        store
            .update_assignment(7, AssignmentPatch::default())
            .is_none()
    );
    assert!(store.log().is_empty());
}

#[test]
fn test_delete_signal() {
    let (mut store, event_id, _) = base();
    assert!(store.delete_event(event_id));
    assert!(!store.delete_event(event_id));
    assert!(!store.delete_event(999));
    assert!(store.get_event(event_id).is_none());
}

#[test]
fn test_shifts_by_event_filter() {
    let (mut store, event_id, duty_id) = base();
    let org = store.get_user_by_username("org").unwrap();
    let other = store.create_event(NewEvent::new(
        "Other",
        noon(),
        noon() + Duration::hours(1),
        "Elsewhere",
        org.id,
    ));
    let other_duty = store.create_duty(NewDuty::new("Tickets", other.id));

    let hour = noon() + Duration::hours(1);
    let s1 = store.create_shift(NewShift::new(event_id, duty_id, noon(), hour));
    let s2 = store.create_shift(NewShift::new(other.id, other_duty.id, noon(), hour));
    let s3 = store.create_shift(NewShift::new(event_id, duty_id, noon(), hour));

    let ids: Vec<_> = store.shifts_by_event(event_id).iter().map(|s| s.id).collect();
    assert_eq!(ids, [s1.id, s3.id]);
    let ids: Vec<_> = store.shifts_by_event(other.id).iter().map(|s| s.id).collect();
    assert_eq!(ids, [s2.id]);
    assert!(store.shifts_by_event(42).is_empty());

    assert_eq!(store.duties_by_event(other.id).len(), 1);
}

#[test]
fn test_secondary_lookups() {
    let store = Store::seeded_at(noon());
    assert_eq!(store.get_user_by_username("admin").map(|u| u.id), Some(1));
    assert!(store.get_user_by_username("Admin").is_none());
    assert_eq!(
        store.get_volunteer_by_email("mike.j@email.com").map(|v| v.name),
        Some("Mike Johnson".to_string())
    );
    assert!(store.get_volunteer_by_email("nobody@email.com").is_none());
    assert_eq!(store.assignments_by_volunteer(3).len(), 1);
}

#[test]
fn test_store_does_not_enforce_uniqueness() {
    let mut store = Store::empty();
    let first = store.create_volunteer(NewVolunteer::new("One", "same@x.org"));
    let second = store.create_volunteer(NewVolunteer::new("Two", "same@x.org"));
    assert_ne!(first.id, second.id);
    assert_eq!(store.list_volunteers().len(), 2);
    assert_eq!(store.get_volunteer_by_email("same@x.org"), Some(first));

    let first = store.create_user(NewUser::new("x", "pw1"));
    let second = store.create_user(NewUser::new("x", "pw2").with_role(Role::Organizer));
    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(store.list_users(), vec![first.clone(), second]);
    assert_eq!(store.get_user_by_username("x"), Some(first));
}

#[test]
fn test_gala_scenario() {
    let (mut store, event_id, duty_id) = base();

    let gala = store.get_event(event_id).unwrap();
    assert_eq!(gala.name, "Gala");
    assert_eq!(gala.status, EventStatus::Scheduled);

    let volunteer = store.create_volunteer(NewVolunteer::new("Ada", "ada@x.org"));
    assert_eq!(volunteer.phone, None);
    let json = serde_json::to_value(&volunteer).unwrap();
    assert!(json.get("phone").is_some_and(|p| p.is_null()));

    let other = store.create_volunteer(NewVolunteer::new("Bo", "bo@x.org"));
    let shift = store.create_shift(NewShift::new(
        event_id,
        duty_id,
        noon(),
        noon() + Duration::hours(2),
    ));
    let a1 = store.create_assignment(NewAssignment::new(shift.id, volunteer.id));
    let a2 = store.create_assignment(NewAssignment::new(shift.id, other.id));
    let ids: Vec<_> = store
        .assignments_by_shift(shift.id)
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, [a1.id, a2.id]);

    assert!(store.delete_duty(duty_id));
    assert!(store.get_duty(duty_id).is_none());
    assert_eq!(store.get_shift(shift.id).unwrap().duty_id, duty_id);
}

#[test]
fn test_records_serialize_camel_case() {
    let store = Store::seeded_at(noon());
    let shift = serde_json::to_value(store.get_shift(1).unwrap()).unwrap();
    assert!(shift.get("maxVolunteers").is_some());
    assert!(shift.get("eventId").is_some());

    let assignment = serde_json::to_value(store.get_assignment(1).unwrap()).unwrap();
    assert_eq!(assignment["status"], "checked_in");
    assert!(assignment.get("checkInTime").is_some());
}

#[test]
fn test_mutations_are_logged() {
    let mut store = Store::empty();
    let v = store.create_volunteer(NewVolunteer::new("Log", "log@x.org"));
    store.update_volunteer(
        v.id,
        VolunteerPatch {
            name: Some("Logged".into()),
            ..Default::default()
        },
    );
    store.delete_volunteer(v.id);
    store.delete_volunteer(v.id);

    let ops: Vec<_> = store.log().iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, ["add", "edit", "del"]);
    assert_eq!(store.log()[0].target, "volunteer #1");
    assert_eq!(store.log()[2].id, 3);
}
