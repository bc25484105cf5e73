use crate::config::{Config, OutputFormat};
use crate::core::portal::{Portal, PortalEntry};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_assignment_status, paint};
use crate::utils::time::format_datetime;
use chrono::Local;

fn describe(entry: &PortalEntry, date_format: &str) -> String {
    let status = paint(
        entry.assignment.status.as_str(),
        color_for_assignment_status(entry.assignment.status),
    );
    match &entry.shift {
        Some(s) => format!(
            "#{} {} / {} | {} → {} | {} | {}",
            entry.assignment.id,
            s.event_name,
            s.duty_name,
            format_datetime(&s.shift.start_time, date_format),
            format_datetime(&s.shift.end_time, date_format),
            s.shift.location.as_deref().unwrap_or("--"),
            status
        ),
        None => format!(
            "#{} {GREY}shift #{} no longer exists{RESET} | {}",
            entry.assignment.id, entry.assignment.shift_id, status
        ),
    }
}

pub fn handle(email: &str, cfg: &Config, store: &Store) -> AppResult<()> {
    let portal = Portal::for_email(store, email, Local::now())?;

    if cfg.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&portal)?);
        return Ok(());
    }

    header(format!(
        "Volunteer Portal: {} ({})",
        portal.volunteer.name,
        portal.initials()
    ));
    println!("{CYAN}Email:{RESET} {}", portal.volunteer.email);

    if portal.entries.is_empty() {
        info("No assignments yet.");
        return Ok(());
    }

    println!("\n{CYAN}Current assignment:{RESET}");
    match portal.current() {
        Some(entry) => println!("  {}", describe(entry, &cfg.date_format)),
        None => println!("  {GREY}none{RESET}"),
    }

    let upcoming = portal.upcoming();
    println!("\n{CYAN}Upcoming:{RESET}");
    if upcoming.is_empty() {
        println!("  {GREY}none{RESET}");
    }
    for entry in upcoming {
        println!("  {}", describe(entry, &cfg.date_format));
    }

    println!("\n{CYAN}All assignments:{RESET}");
    for entry in &portal.entries {
        println!("  {}", describe(entry, &cfg.date_format));
    }
    Ok(())
}
