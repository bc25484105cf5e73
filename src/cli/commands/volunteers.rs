use crate::cli::parser::{VolunteerAction, VolunteerFields};
use crate::cli::render::{print_record, print_records, volunteers_table};
use crate::config::Config;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::{NewVolunteer, VolunteerPatch};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::args::split_tags;

use super::{not_found, nullable, report_delete, warn_if_unchanged};

fn build_patch(fields: &VolunteerFields) -> VolunteerPatch {
    VolunteerPatch {
        name: fields.name.clone(),
        email: fields.email.clone(),
        phone: nullable(fields.phone.clone(), fields.clear_phone),
        skills: nullable(fields.skills.as_deref().map(split_tags), fields.clear_skills),
        availability: nullable(
            fields.availability.as_deref().map(split_tags),
            fields.clear_availability,
        ),
    }
}

pub fn handle(action: &VolunteerAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        VolunteerAction::List => print_records(cfg, &store.list_volunteers(), volunteers_table),
        VolunteerAction::Get { id } => {
            let volunteer = store
                .get_volunteer(*id)
                .ok_or_else(|| not_found("volunteer", *id))?;
            print_record(cfg, &volunteer, volunteers_table)
        }
        VolunteerAction::Find { email } => {
            let volunteer = store
                .get_volunteer_by_email(email)
                .ok_or_else(|| AppError::not_found("volunteer", email.as_str()))?;
            print_record(cfg, &volunteer, volunteers_table)
        }
        VolunteerAction::Create {
            name,
            email,
            phone,
            skills,
            availability,
        } => {
            let input = NewVolunteer {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                skills: skills.as_deref().map(split_tags),
                availability: availability.as_deref().map(split_tags),
            };
            validate::new_volunteer(store, &input)?;

            let volunteer = store.create_volunteer(input);
            success(format!(
                "Registered volunteer #{} '{}'.",
                volunteer.id, volunteer.name
            ));
            print_record(cfg, &volunteer, volunteers_table)
        }
        VolunteerAction::Update { id, fields } => {
            let patch = build_patch(fields);
            if warn_if_unchanged(&patch) {
                return Ok(());
            }
            validate::volunteer_patch(store, *id, &patch)?;

            let volunteer = store
                .update_volunteer(*id, patch)
                .ok_or_else(|| not_found("volunteer", *id))?;
            success(format!("Updated volunteer #{}.", volunteer.id));
            print_record(cfg, &volunteer, volunteers_table)
        }
        VolunteerAction::Delete { id } => {
            report_delete("volunteer", *id, store.delete_volunteer(*id))
        }
    }
}
