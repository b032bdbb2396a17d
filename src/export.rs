//! Export driver behind the `gcode-export` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::Config;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::host::JsonHost;
use crate::marshal::ToHostValue;
use crate::parser::CommandReader;

/// Counts reported at the end of an export run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub commands: usize,
    pub exported: usize,
    pub failed: usize,
}

/// Parse every command from `reader` and write one JSON tuple per line
///
/// Commands that fail to marshal are reported to `sink` and skipped.
pub fn export_commands<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> Result<ExportSummary> {
    let host = JsonHost::new();
    let mut summary = ExportSummary::default();

    for item in CommandReader::new(reader) {
        let (line_number, command) = item.context("Failed to read G-code input")?;
        summary.commands += 1;

        match command.to_host_value(&host, sink) {
            Ok(value) => {
                if config.pretty {
                    serde_json::to_writer_pretty(&mut *writer, &value)?;
                } else {
                    serde_json::to_writer(&mut *writer, &value)?;
                }
                writeln!(writer)?;
                summary.exported += 1;
            }
            Err(e) => {
                log::debug!("Skipping line {}: {}", line_number, e.kind);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Run the export tool with configuration from the command line
pub fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let summary = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open G-code file: {}", path.display()))?;
            export_commands(BufReader::new(file), &mut out, &config, &mut LogSink)?
        }
        None => export_commands(io::stdin().lock(), &mut out, &config, &mut LogSink)?,
    };
    out.flush()?;

    log::info!(
        "Exported {} of {} commands",
        summary.exported,
        summary.commands
    );
    if config.summary {
        eprintln!("{}", serde_json::to_string(&summary)?);
    }

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} commands could not be exported",
            summary.failed,
            summary.commands
        );
    }

    Ok(())
}
