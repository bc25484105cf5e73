use crate::cli::parser::{DutyAction, DutyFields};
use crate::cli::render::{duties_table, print_record, print_records};
use crate::config::Config;
use crate::core::validate;
use crate::errors::AppResult;
use crate::models::{DutyPatch, NewDuty};
use crate::store::Store;
use crate::ui::messages::success;

use super::{not_found, nullable, report_delete, warn_if_unchanged};

fn build_patch(fields: &DutyFields) -> DutyPatch {
    DutyPatch {
        name: fields.name.clone(),
        description: nullable(fields.description.clone(), fields.clear_description),
        event_id: fields.event,
        color: fields.color.clone(),
    }
}

pub fn handle(action: &DutyAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        DutyAction::List { event } => {
            let duties = match event {
                Some(event_id) => store.duties_by_event(*event_id),
                None => store.list_duties(),
            };
            print_records(cfg, &duties, duties_table)
        }
        DutyAction::Get { id } => {
            let duty = store.get_duty(*id).ok_or_else(|| not_found("duty", *id))?;
            print_record(cfg, &duty, duties_table)
        }
        DutyAction::Create {
            name,
            description,
            event,
            color,
        } => {
            let input = NewDuty {
                name: name.clone(),
                description: description.clone(),
                event_id: *event,
                color: color.clone(),
            };
            validate::new_duty(store, &input)?;

            let duty = store.create_duty(input);
            success(format!(
                "Created duty #{} '{}' for event #{}.",
                duty.id, duty.name, duty.event_id
            ));
            print_record(cfg, &duty, duties_table)
        }
        DutyAction::Update { id, fields } => {
            let patch = build_patch(fields);
            if warn_if_unchanged(&patch) {
                return Ok(());
            }
            validate::duty_patch(store, *id, &patch)?;

            let duty = store
                .update_duty(*id, patch)
                .ok_or_else(|| not_found("duty", *id))?;
            success(format!("Updated duty #{}.", duty.id));
            print_record(cfg, &duty, duties_table)
        }
        DutyAction::Delete { id } => report_delete("duty", *id, store.delete_duty(*id)),
    }
}
