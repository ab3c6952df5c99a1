//! Export CLI command
//!
//! Writes the ledger to CSV, JSON or YAML.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use super::Session;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_ledger_json, export_ledger_yaml, export_transactions_csv};

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments for `export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file, or "-" for stdout (defaults to the exports directory)
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(session: &Session, args: ExportArgs) -> TrackerResult<()> {
    let is_stdout = args.output.as_deref().map_or(false, |p| p.as_os_str() == "-");

    if is_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_export(session, args.format, !args.compact, &mut handle)?;
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => {
            session.paths.ensure_directories()?;
            session.paths.export_dir().join(format!(
                "ledger-{}.{}",
                session.today.format("%Y-%m-%d"),
                args.format.extension()
            ))
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let file = File::create(&path)
        .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_export(session, args.format, !args.compact, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    info!(path = %path.display(), format = ?args.format, "ledger exported");
    println!(
        "Exported {} transactions to {}",
        session.ledger.len(),
        path.display()
    );
    Ok(())
}

fn write_export<W: Write>(
    session: &Session,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(&session.ledger, writer),
        ExportFormat::Json => {
            export_ledger_json(&session.ledger, writer, pretty)?;
            writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))
        }
        ExportFormat::Yaml => export_ledger_yaml(&session.ledger, writer),
    }
}
