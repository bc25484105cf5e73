pub mod assignments;
pub mod config;
pub mod duties;
pub mod events;
pub mod export;
pub mod log;
pub mod portal;
pub mod shell;
pub mod shifts;
pub mod stats;
pub mod users;
pub mod volunteers;

use crate::errors::{AppError, AppResult};
use crate::models::Id;
use crate::ui::messages::{success, warning};

/// Patch fields on the command line use `--<field>` to set and
/// `--clear-<field>` to reset to empty; neither leaves the field untouched.
pub(crate) fn nullable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

pub(crate) fn not_found(kind: &'static str, id: Id) -> AppError {
    AppError::not_found(kind, id)
}

/// Report the outcome of a delete; an unknown handle is an error.
pub(crate) fn report_delete(kind: &'static str, id: Id, removed: bool) -> AppResult<()> {
    if !removed {
        return Err(not_found(kind, id));
    }
    success(format!("Deleted {kind} #{id}."));
    Ok(())
}

pub(crate) fn warn_if_unchanged<P: Default + PartialEq>(patch: &P) -> bool {
    let unchanged = *patch == P::default();
    if unchanged {
        warning("Nothing to update: no fields given.");
    }
    unchanged
}
