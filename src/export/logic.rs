use crate::db::audit::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::export::sinks::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export flow: load the table, flatten to display strings,
/// write the chosen sink.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let sheet = crate::db::queries::load_sheet(pool)?;
        if sheet.is_empty() {
            warning("No entries to export.");
            return Ok(());
        }

        let rows: Vec<EntryExport> = sheet.entries.iter().map(EntryExport::from).collect();

        let label = format.as_str();
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        if let Err(e) = audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} entries as {}", rows.len(), label),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}
