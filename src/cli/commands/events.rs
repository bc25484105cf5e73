use crate::cli::parser::{EventAction, EventFields};
use crate::cli::render::{events_table, print_record, print_records};
use crate::config::Config;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::{EventPatch, EventStatus, NewEvent};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::time::{parse_datetime, parse_optional_datetime};

use super::{not_found, nullable, report_delete, warn_if_unchanged};

fn parse_status(s: &str) -> AppResult<EventStatus> {
    EventStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

fn build_patch(fields: &EventFields) -> AppResult<EventPatch> {
    Ok(EventPatch {
        name: fields.name.clone(),
        description: nullable(fields.description.clone(), fields.clear_description),
        start_date: parse_optional_datetime(fields.start.as_ref())?,
        end_date: parse_optional_datetime(fields.end.as_ref())?,
        location: fields.location.clone(),
        organizer_id: fields.organizer,
        status: fields.status.as_deref().map(parse_status).transpose()?,
    })
}

pub fn handle(action: &EventAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        EventAction::List => print_records(cfg, &store.list_events(), events_table),
        EventAction::Get { id } => {
            let event = store.get_event(*id).ok_or_else(|| not_found("event", *id))?;
            print_record(cfg, &event, events_table)
        }
        EventAction::Create {
            name,
            description,
            start,
            end,
            location,
            organizer,
            status,
        } => {
            let input = NewEvent {
                name: name.clone(),
                description: description.clone(),
                start_date: parse_datetime(start)?,
                end_date: parse_datetime(end)?,
                location: location.clone(),
                organizer_id: *organizer,
                status: status.as_deref().map(parse_status).transpose()?,
            };
            validate::new_event(store, &input)?;

            let event = store.create_event(input);
            success(format!("Created event #{} '{}'.", event.id, event.name));
            print_record(cfg, &event, events_table)
        }
        EventAction::Update { id, fields } => {
            let patch = build_patch(fields)?;
            if warn_if_unchanged(&patch) {
                return Ok(());
            }
            validate::event_patch(store, *id, &patch)?;

            let event = store
                .update_event(*id, patch)
                .ok_or_else(|| not_found("event", *id))?;
            success(format!("Updated event #{}.", event.id));
            print_record(cfg, &event, events_table)
        }
        EventAction::Delete { id } => report_delete("event", *id, store.delete_event(*id)),
    }
}
