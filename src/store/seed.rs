//! Demonstration dataset loaded once when a store is built with
//! [`Store::new`](super::Store::new).

use super::Store;
use crate::models::{
    AssignmentStatus, EventStatus, NewAssignment, NewDuty, NewEvent, NewShift, NewUser,
    NewVolunteer, Role,
};
use chrono::{DateTime, Duration, Local};

/// Populate `store` relative to `now` and return a one-line summary.
pub(crate) fn seed(store: &mut Store, now: DateTime<Local>) -> String {
    let admin = store.create_user(NewUser::new("admin", "admin").with_role(Role::Organizer));

    let sarah = store.create_volunteer(
        NewVolunteer::new("Sarah Chen", "sarah.chen@email.com")
            .with_phone("(555) 123-4567")
            .with_skills(["registration", "customer_service"])
            .with_availability(["weekdays", "weekends"]),
    );
    let mike = store.create_volunteer(
        NewVolunteer::new("Mike Johnson", "mike.j@email.com")
            .with_phone("(555) 234-5678")
            .with_skills(["setup", "manual_labor"])
            .with_availability(["weekends"]),
    );
    let anna = store.create_volunteer(
        NewVolunteer::new("Anna Davis", "anna.davis@email.com")
            .with_phone("(555) 345-6789")
            .with_skills(["food_service", "hospitality"])
            .with_availability(["weekdays"]),
    );

    let event = store.create_event(
        NewEvent::new(
            "Charity Fundraiser",
            now,
            now + Duration::hours(8),
            "Community Center",
            admin.id,
        )
        .with_description("Annual charity fundraising event")
        .with_status(EventStatus::Active),
    );

    let registration = store.create_duty(
        NewDuty::new("Registration", event.id)
            .with_description("Check-in volunteers and guests")
            .with_color("blue"),
    );
    let setup = store.create_duty(
        NewDuty::new("Setup Crew", event.id)
            .with_description("Set up tables, chairs, and equipment")
            .with_color("green"),
    );
    let food = store.create_duty(
        NewDuty::new("Food Service", event.id)
            .with_description("Serve food and beverages")
            .with_color("purple"),
    );

    let entrance = store.create_shift(
        NewShift::new(event.id, registration.id, now, now + Duration::hours(4))
            .with_max_volunteers(2)
            .with_location("Main Entrance"),
    );
    let hall = store.create_shift(
        NewShift::new(
            event.id,
            setup.id,
            now - Duration::hours(3),
            now + Duration::hours(1),
        )
        .with_max_volunteers(4)
        .with_location("Main Hall"),
    );
    let food_area = store.create_shift(
        NewShift::new(
            event.id,
            food.id,
            now - Duration::hours(1),
            now + Duration::hours(3),
        )
        .with_max_volunteers(3)
        .with_location("Food Area"),
    );

    store.create_assignment(
        NewAssignment::new(entrance.id, sarah.id)
            .with_status(AssignmentStatus::CheckedIn)
            .checked_in_at(now - Duration::minutes(30)),
    );
    store.create_assignment(
        NewAssignment::new(hall.id, mike.id).with_status(AssignmentStatus::NoShow),
    );
    store.create_assignment(
        NewAssignment::new(food_area.id, anna.id)
            .with_status(AssignmentStatus::Break)
            .checked_in_at(now - Duration::hours(1)),
    );

    format!(
        "seeded 1 user, 3 volunteers, event '{}', 3 duties, 3 shifts, 3 assignments",
        event.name
    )
}
