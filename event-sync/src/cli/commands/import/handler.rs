//! Import command handler

use anyhow::{Context, Result};
use colored::*;

use super::ImportCommands;
use crate::api::{MongoStore, WriteSummary};
use crate::api::operations::write_events;
use crate::config::DatabaseConfig;
use crate::transfer::{Diagnostic, Event, EventTransformer, TransformConfig, load_rows};

/// Load the sheet, transform it, and upsert the events
pub async fn handle_import_command(
    args: ImportCommands,
    transform_config: TransformConfig,
) -> Result<()> {
    println!("Reading {}...", args.file.display().to_string().cyan());
    let rows = load_rows(&args.file, args.sheet.as_deref())?;
    log::info!("Loaded {} rows from {}", rows.len(), args.file.display());

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let events = EventTransformer::new(transform_config).transform(&rows, &mut diagnostics);
    report_diagnostics(&diagnostics);

    if events.is_empty() {
        println!("{}", "No valid events found.".yellow());
        return Ok(());
    }

    if args.dry_run {
        println!("{}", format_events(&events)?);
        println!(
            "Dry run: {} events would be uploaded",
            events.len().to_string().bright_green()
        );
        return Ok(());
    }

    let db_config = DatabaseConfig::from_env(args.database.into())?;

    println!("Connecting to MongoDB...");
    let store = MongoStore::connect(&db_config).await?;

    println!("Uploading {} events...", events.len());
    let summary = write_events(&store, &db_config.collection, &events).await?;
    print_summary(&summary);

    Ok(())
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        log::warn!("{}", diagnostic);
    }
    if !diagnostics.is_empty() {
        println!(
            "{} {} warnings while reading the sheet",
            "⚠".yellow(),
            diagnostics.len()
        );
    }
}

fn format_events(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("Failed to format events as JSON")
}

fn print_summary(summary: &WriteSummary) {
    println!(
        "{} ({} events)",
        "Upload complete!".bright_green().bold(),
        summary.total()
    );
    println!("Inserted: {}", summary.inserted);
    println!("Modified: {}", summary.modified);
    if summary.unchanged > 0 {
        println!("Unchanged: {}", summary.unchanged.to_string().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::DatabaseArgs;
    use std::path::PathBuf;

    fn dry_run_args(file: PathBuf) -> ImportCommands {
        ImportCommands {
            file,
            sheet: None,
            dry_run: true,
            database: DatabaseArgs::default(),
        }
    }

    #[tokio::test]
    async fn test_dry_run_needs_no_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        std::fs::write(
            &path,
            "Event Name,Category,POC name,POC mobile\nHack Day,Software,Asha,555\n",
        )
        .unwrap();

        handle_import_command(dry_run_args(path), TransformConfig::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = handle_import_command(
            dry_run_args(PathBuf::from("no-such-sheet.xlsx")),
            TransformConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "no-such-sheet.xlsx not found");
    }

    #[test]
    fn test_format_events_uses_document_field_names() {
        let json = format_events(&[Event::new("Hack Day", "Software")]).unwrap();
        assert!(json.contains("\"eventName\": \"Hack Day\""));
        assert!(json.contains("\"prizePool\""));
    }
}
