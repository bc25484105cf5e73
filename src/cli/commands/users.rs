use crate::cli::parser::UserAction;
use crate::cli::render::{print_record, print_records, users_table};
use crate::config::Config;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, Role};
use crate::store::Store;
use crate::ui::messages::success;

use super::not_found;

fn parse_role(s: &str) -> AppResult<Role> {
    Role::from_code(s).ok_or_else(|| AppError::InvalidRole(s.to_string()))
}

pub fn handle(action: &UserAction, cfg: &Config, store: &mut Store) -> AppResult<()> {
    match action {
        UserAction::List => print_records(cfg, &store.list_users(), users_table),
        UserAction::Get { id } => {
            let user = store.get_user(*id).ok_or_else(|| not_found("user", *id))?;
            print_record(cfg, &user, users_table)
        }
        UserAction::Find { username } => {
            let user = store
                .get_user_by_username(username)
                .ok_or_else(|| AppError::not_found("user", username.as_str()))?;
            print_record(cfg, &user, users_table)
        }
        UserAction::Create {
            username,
            password,
            role,
        } => {
            let input = NewUser {
                username: username.clone(),
                password: password.clone(),
                role: role.as_deref().map(parse_role).transpose()?,
            };
            validate::new_user(store, &input)?;

            let user = store.create_user(input);
            success(format!(
                "Created user #{} '{}' ({}).",
                user.id, user.username, user.role
            ));
            print_record(cfg, &user, users_table)
        }
    }
}
