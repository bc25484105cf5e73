//! Table and JSON rendering of records for list/get commands.

use crate::config::{Config, OutputFormat};
use crate::core::shift_view::{ShiftDetails, ShiftTiming};
use crate::errors::AppResult;
use crate::models::{Assignment, Duty, Event, Shift, User, Volunteer};
use crate::ui::messages::info;
use crate::utils::colors::{
    GREEN, GREY, YELLOW, color_for_assignment_status, color_for_event_status, color_for_tag,
    colorize_optional, paint,
};
use crate::utils::table::Table;
use crate::utils::time::{format_datetime, format_optional, mins2readable};
use serde::Serialize;
use std::slice;

/// Print `rows` as a JSON array or as a table built by `table`.
pub fn print_records<T, F>(cfg: &Config, rows: &[T], table: F) -> AppResult<()>
where
    T: Serialize,
    F: FnOnce(&Config, &[T]) -> Table,
{
    match cfg.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table if rows.is_empty() => info("No records found."),
        OutputFormat::Table => print!("{}", table(cfg, rows).render()),
    }
    Ok(())
}

/// Print one record as a JSON object or as a single-row table.
pub fn print_record<T, F>(cfg: &Config, row: &T, table: F) -> AppResult<()>
where
    T: Serialize,
    F: FnOnce(&Config, &[T]) -> Table,
{
    match cfg.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(row)?),
        OutputFormat::Table => print!("{}", table(cfg, slice::from_ref(row)).render()),
    }
    Ok(())
}

fn opt_text(value: Option<&str>) -> String {
    colorize_optional(value.unwrap_or("--"))
}

fn tags(value: Option<&Vec<String>>) -> String {
    match value {
        Some(list) if !list.is_empty() => list.join(", "),
        Some(_) => String::new(),
        None => colorize_optional("--"),
    }
}

fn new_table(cfg: &Config, headers: &[&str]) -> Table {
    Table::new(headers).with_separator(&cfg.separator_char)
}

pub fn users_table(cfg: &Config, users: &[User]) -> Table {
    let mut t = new_table(cfg, &["ID", "USERNAME", "ROLE"]);
    for u in users {
        t.add_row(vec![
            u.id.to_string(),
            u.username.clone(),
            u.role.to_string(),
        ]);
    }
    t
}

pub fn events_table(cfg: &Config, events: &[Event]) -> Table {
    let mut t = new_table(
        cfg,
        &[
            "ID",
            "NAME",
            "START",
            "END",
            "DURATION",
            "LOCATION",
            "ORGANIZER",
            "STATUS",
            "DESCRIPTION",
        ],
    );
    for e in events {
        t.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            format_datetime(&e.start_date, &cfg.date_format),
            format_datetime(&e.end_date, &cfg.date_format),
            mins2readable(e.duration_minutes()),
            e.location.clone(),
            format!("#{}", e.organizer_id),
            paint(e.status.as_str(), color_for_event_status(e.status)),
            opt_text(e.description.as_deref()),
        ]);
    }
    t
}

pub fn duties_table(cfg: &Config, duties: &[Duty]) -> Table {
    let mut t = new_table(cfg, &["ID", "NAME", "EVENT", "COLOR", "DESCRIPTION"]);
    for d in duties {
        t.add_row(vec![
            d.id.to_string(),
            d.name.clone(),
            format!("#{}", d.event_id),
            paint(&d.color, color_for_tag(&d.color)),
            opt_text(d.description.as_deref()),
        ]);
    }
    t
}

pub fn shifts_table(cfg: &Config, shifts: &[Shift]) -> Table {
    let mut t = new_table(
        cfg,
        &["ID", "EVENT", "DUTY", "START", "END", "LOCATION", "MAX"],
    );
    for s in shifts {
        t.add_row(vec![
            s.id.to_string(),
            format!("#{}", s.event_id),
            format!("#{}", s.duty_id),
            format_datetime(&s.start_time, &cfg.date_format),
            format_datetime(&s.end_time, &cfg.date_format),
            opt_text(s.location.as_deref()),
            s.max_volunteers.to_string(),
        ]);
    }
    t
}

pub fn shift_details_table(cfg: &Config, details: &[ShiftDetails]) -> Table {
    let mut t = new_table(
        cfg,
        &["ID", "EVENT", "DUTY", "START", "END", "LOCATION", "FILLED", "TIMING"],
    );
    for d in details {
        let timing_color = match d.timing {
            ShiftTiming::Active => GREEN,
            ShiftTiming::Upcoming => YELLOW,
            ShiftTiming::Completed => GREY,
        };
        t.add_row(vec![
            d.shift.id.to_string(),
            d.event_name.clone(),
            d.duty_name.clone(),
            format_datetime(&d.shift.start_time, &cfg.date_format),
            format_datetime(&d.shift.end_time, &cfg.date_format),
            opt_text(d.shift.location.as_deref()),
            format!("{}/{}", d.assigned_volunteers, d.shift.max_volunteers),
            paint(d.timing.as_str(), timing_color),
        ]);
    }
    t
}

pub fn volunteers_table(cfg: &Config, volunteers: &[Volunteer]) -> Table {
    let mut t = new_table(
        cfg,
        &["ID", "NAME", "EMAIL", "PHONE", "SKILLS", "AVAILABILITY"],
    );
    for v in volunteers {
        t.add_row(vec![
            v.id.to_string(),
            v.name.clone(),
            v.email.clone(),
            opt_text(v.phone.as_deref()),
            tags(v.skills.as_ref()),
            tags(v.availability.as_ref()),
        ]);
    }
    t
}

pub fn assignments_table(cfg: &Config, assignments: &[Assignment]) -> Table {
    let mut t = new_table(
        cfg,
        &["ID", "SHIFT", "VOLUNTEER", "STATUS", "CHECK-IN", "CHECK-OUT", "NOTES"],
    );
    for a in assignments {
        t.add_row(vec![
            a.id.to_string(),
            format!("#{}", a.shift_id),
            format!("#{}", a.volunteer_id),
            paint(a.status.as_str(), color_for_assignment_status(a.status)),
            colorize_optional(&format_optional(a.check_in_time.as_ref(), &cfg.date_format)),
            colorize_optional(&format_optional(a.check_out_time.as_ref(), &cfg.date_format)),
            opt_text(a.notes.as_deref()),
        ]);
    }
    t
}
