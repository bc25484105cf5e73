/// ANSI color helper utilities for terminal output.
use crate::models::{AssignmentStatus, EventStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Returns GREY when the field is empty (None, "" or "--"), RESET otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn color_for_event_status(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Scheduled => BLUE,
        EventStatus::Active => GREEN,
        EventStatus::Completed => GREY,
        EventStatus::Cancelled => RED,
    }
}

pub fn color_for_assignment_status(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Assigned => BLUE,
        AssignmentStatus::CheckedIn => GREEN,
        AssignmentStatus::Break => YELLOW,
        AssignmentStatus::NoShow => RED,
    }
}

/// Map a duty color tag to the closest terminal color.
pub fn color_for_tag(tag: &str) -> &'static str {
    match tag.to_lowercase().as_str() {
        "blue" => BLUE,
        "green" => GREEN,
        "purple" | "magenta" => MAGENTA,
        "red" => RED,
        "yellow" | "orange" => YELLOW,
        "cyan" | "teal" => CYAN,
        _ => RESET,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
