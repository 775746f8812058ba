use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tablextract::{ExtractConfig, ExtractReport, Extractor, TableSource};

use crate::cli::{Cli, SummaryFormat};
use crate::shared::{ProgressReporter, open_source, report_error, resolve_pages};

/// JSON summary printed with `--format json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    input: &'a Path,
    #[serde(flatten)]
    report: &'a ExtractReport,
}

pub fn run(cli: &Cli) -> Result<(), i32> {
    let source = open_source(
        &cli.file,
        cli.password.as_deref(),
        &cli.detection_settings(),
    )?;

    let mut config = ExtractConfig::new(&cli.output_dir);
    config.pages = resolve_pages(cli.pages.as_deref(), source.page_count())?;

    let progress = ProgressReporter::new();
    let result = Extractor::new(config)
        .run_with_progress(&source, |current, total| progress.report(current, total));
    progress.finish();
    let report = result.map_err(|e| report_error(&e))?;

    let mut stdout = io::stdout().lock();
    let written = match cli.format {
        SummaryFormat::Text => write_text(&mut stdout, &cli.file, &report),
        SummaryFormat::Json => write_json(&mut stdout, &cli.file, &report),
    };
    written.map_err(|e| {
        eprintln!("Error: failed to print summary: {e}");
        1
    })
}

fn write_text(out: &mut impl Write, input: &Path, report: &ExtractReport) -> io::Result<()> {
    for table in &report.tables {
        writeln!(
            out,
            "Wrote {} ({} rows x {} columns)",
            table.path.display(),
            table.rows,
            table.columns,
        )?;
    }

    match report.tables.len() {
        0 => writeln!(out, "No tables found in {}", input.display()),
        1 => writeln!(out, "Saved 1 table to {}", report.output_dir.display()),
        n => writeln!(out, "Saved {n} tables to {}", report.output_dir.display()),
    }
}

fn write_json(out: &mut impl Write, input: &Path, report: &ExtractReport) -> io::Result<()> {
    let summary = Summary { input, report };
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)
}
