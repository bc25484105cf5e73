//! Dashboard statistics computed from the store's list operations.

use crate::store::Store;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_events: usize,
    pub total_volunteers: usize,
    /// Sum of all shift durations, in hours with one decimal.
    pub hours_scheduled: f64,
    /// Percentage of assignments checked in or on a break.
    pub attendance_rate: u32,
}

impl DashboardStats {
    pub fn compute(store: &Store) -> Self {
        let active_events = store
            .list_events()
            .iter()
            .filter(|e| e.status.is_active())
            .count();

        let total_minutes: i64 = store
            .list_shifts()
            .iter()
            .map(|s| s.duration_minutes().max(0))
            .sum();

        let assignments = store.list_assignments();
        let present = assignments.iter().filter(|a| a.status.is_present()).count();

        Self {
            active_events,
            total_volunteers: store.list_volunteers().len(),
            hours_scheduled: hours_one_decimal(total_minutes),
            attendance_rate: percentage(present, assignments.len()),
        }
    }
}

fn hours_one_decimal(minutes: i64) -> f64 {
    (minutes as f64 / 6.0).round() / 10.0
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / total as f64).round() as u32
}
