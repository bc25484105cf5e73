use crate::cli::parser::{AssignmentAction, AssignmentFields};
use crate::cli::render::{assignments_table, print_record, print_records};
use crate::config::Config;
use crate::core::{attendance, validate};
use crate::errors::{AppError, AppResult};
use crate::models::{AssignmentPatch, AssignmentStatus, NewAssignment};
use crate::store::Store;
use crate::ui::messages::{success, warning};
use crate::utils::time::{parse_datetime, parse_optional_datetime};
use chrono::Local;

use super::{not_found, nullable, report_delete, warn_if_unchanged};

fn parse_status(s: &str) -> AppResult<AssignmentStatus> {
    AssignmentStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

fn build_patch(fields: &AssignmentFields) -> AppResult<AssignmentPatch> {
    Ok(AssignmentPatch {
        shift_id: fields.shift,
        volunteer_id: fields.volunteer,
        status: fields.status.as_deref().map(parse_status).transpose()?,
        check_in_time: nullable(
            parse_optional_datetime(fields.check_in.as_ref())?,
            fields.clear_check_in,
        ),
        check_out_time: nullable(
            parse_optional_datetime(fields.check_out.as_ref())?,
            fields.clear_check_out,
        ),
        notes: nullable(fields.notes.clone(), fields.clear_notes),
    })
}

fn instant(at: &Option<String>) -> AppResult<chrono::DateTime<Local>> {
    match at {
        Some(s) => parse_datetime(s),
        None => Ok(Local::now()),
    }
}

pub fn handle(action: &AssignmentAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        AssignmentAction::List { volunteer, shift } => {
            let rows = match (volunteer, shift) {
                (Some(volunteer_id), _) => store.assignments_by_volunteer(*volunteer_id),
                (None, Some(shift_id)) => store.assignments_by_shift(*shift_id),
                (None, None) => store.list_assignments(),
            };
            print_records(cfg, &rows, assignments_table)
        }
        AssignmentAction::Get { id } => {
            let assignment = store
                .get_assignment(*id)
                .ok_or_else(|| not_found("assignment", *id))?;
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::Create {
            shift,
            volunteer,
            status,
            notes,
        } => {
            let input = NewAssignment {
                shift_id: *shift,
                volunteer_id: *volunteer,
                status: status.as_deref().map(parse_status).transpose()?,
                notes: notes.clone(),
                ..Default::default()
            };
            validate::new_assignment(store, &input)?;

            if let Some((assigned, max)) = validate::shift_is_full(store, *shift) {
                warning(format!(
                    "Shift #{} already has {}/{} volunteers; assigning anyway.",
                    shift, assigned, max
                ));
            }

            let assignment = store.create_assignment(input);
            success(format!(
                "Assigned volunteer #{} to shift #{} (assignment #{}).",
                assignment.volunteer_id, assignment.shift_id, assignment.id
            ));
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::Update { id, fields } => {
            let patch = build_patch(fields)?;
            if warn_if_unchanged(&patch) {
                return Ok(());
            }
            validate::assignment_patch(store, *id, &patch)?;

            let assignment = store
                .update_assignment(*id, patch)
                .ok_or_else(|| not_found("assignment", *id))?;
            success(format!("Updated assignment #{}.", assignment.id));
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::Delete { id } => {
            report_delete("assignment", *id, store.delete_assignment(*id))
        }
        AssignmentAction::CheckIn { id, at } => {
            let assignment = attendance::check_in(store, *id, instant(at)?)?;
            success(format!("Assignment #{} checked in.", assignment.id));
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::CheckOut { id, at } => {
            let assignment = attendance::check_out(store, *id, instant(at)?)?;
            match attendance::worked_minutes(&assignment) {
                Some(mins) => success(format!(
                    "Assignment #{} checked out after {}.",
                    assignment.id,
                    crate::utils::mins2readable(mins)
                )),
                None => success(format!("Assignment #{} checked out.", assignment.id)),
            }
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::Break { id } => {
            let assignment = attendance::start_break(store, *id)?;
            success(format!("Assignment #{} is on a break.", assignment.id));
            print_record(cfg, &assignment, assignments_table)
        }
        AssignmentAction::NoShow { id } => {
            let assignment = attendance::mark_no_show(store, *id)?;
            success(format!("Assignment #{} marked as no-show.", assignment.id));
            print_record(cfg, &assignment, assignments_table)
        }
    }
}
