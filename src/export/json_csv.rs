// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ROSTER_HEADERS;
use crate::export::{RosterRow, Snapshot, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the snapshot as pretty-printed JSON.
pub(crate) fn export_json(snapshot: &Snapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(snapshot)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export the roster as CSV (serde writes the header before the first row).
pub(crate) fn export_csv(rows: &[RosterRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        wtr.write_record(ROSTER_HEADERS)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
