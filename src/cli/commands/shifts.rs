use crate::cli::parser::{ShiftAction, ShiftFields};
use crate::cli::render::{print_record, print_records, shift_details_table, shifts_table};
use crate::config::Config;
use crate::core::shift_view::shift_details;
use crate::core::validate;
use crate::errors::AppResult;
use crate::models::{NewShift, ShiftPatch};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::time::{parse_datetime, parse_optional_datetime};
use chrono::Local;

use super::{not_found, nullable, report_delete, warn_if_unchanged};

fn build_patch(fields: &ShiftFields) -> AppResult<ShiftPatch> {
    Ok(ShiftPatch {
        event_id: fields.event,
        duty_id: fields.duty,
        start_time: parse_optional_datetime(fields.start.as_ref())?,
        end_time: parse_optional_datetime(fields.end.as_ref())?,
        location: nullable(fields.location.clone(), fields.clear_location),
        max_volunteers: fields.max,
    })
}

pub fn handle(action: &ShiftAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        ShiftAction::List { event, details } => {
            if *details {
                let rows = shift_details(store, *event, Local::now());
                return print_records(cfg, &rows, shift_details_table);
            }
            let shifts = match event {
                Some(event_id) => store.shifts_by_event(*event_id),
                None => store.list_shifts(),
            };
            print_records(cfg, &shifts, shifts_table)
        }
        ShiftAction::Get { id } => {
            let shift = store.get_shift(*id).ok_or_else(|| not_found("shift", *id))?;
            print_record(cfg, &shift, shifts_table)
        }
        ShiftAction::Create {
            event,
            duty,
            start,
            end,
            location,
            max,
        } => {
            let input = NewShift {
                event_id: *event,
                duty_id: *duty,
                start_time: parse_datetime(start)?,
                end_time: parse_datetime(end)?,
                location: location.clone(),
                max_volunteers: *max,
            };
            validate::new_shift(store, &input)?;

            let shift = store.create_shift(input);
            success(format!(
                "Created shift #{} (duty #{}, max {}).",
                shift.id, shift.duty_id, shift.max_volunteers
            ));
            print_record(cfg, &shift, shifts_table)
        }
        ShiftAction::Update { id, fields } => {
            let patch = build_patch(fields)?;
            if warn_if_unchanged(&patch) {
                return Ok(());
            }
            validate::shift_patch(store, *id, &patch)?;

            let shift = store
                .update_shift(*id, patch)
                .ok_or_else(|| not_found("shift", *id))?;
            success(format!("Updated shift #{}.", shift.id));
            print_record(cfg, &shift, shifts_table)
        }
        ShiftAction::Delete { id } => report_delete("shift", *id, store.delete_shift(*id)),
    }
}
