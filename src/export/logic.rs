// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RosterRow, Snapshot};
use crate::store::Store;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the store.
    ///
    /// - `format`: `json` writes the full snapshot, `csv` the assignment roster
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        store: &mut Store,
        format: ExportFormat,
        file: &str,
        force: bool,
        date_format: &str,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(&Snapshot::capture(store), path)?,
            ExportFormat::Csv => {
                let rows = RosterRow::roster(store, date_format);
                if rows.is_empty() {
                    warning("No assignments to export; writing header only.");
                }
                export_csv(&rows, path)?
            }
        }

        store.note(
            "export",
            format.as_str(),
            &format!("exported to {}", path.display()),
        );
        Ok(())
    }
}
