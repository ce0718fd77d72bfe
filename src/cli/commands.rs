use crate::analyzers::SeriesAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{QcOutcome, QcPipeline};
use crate::readers::ObservationReader;
use crate::settings::{QcSettings, SettingsOverrides};
use crate::utils::progress::ProgressReporter;
use crate::writers::{write_outputs, ComparisonWriter, ReportWriter, SeriesWriter};
use std::path::Path;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            input,
            output,
            report,
            format,
            comparison_dir,
        } => {
            let settings = QcSettings::load(cli.config.as_deref())?.with_overrides(
                SettingsOverrides {
                    cleaned_output: output,
                    report_output: report,
                    report_format: format,
                    comparison_dir,
                },
            )?;

            println!("Checking {}", input.display());
            let outcome = check_file(&input, cli.quiet)?;

            if cli.verbose {
                print_stage_summaries(&outcome);
            }
            println!("\nFinal changed values counts:\n{}", outcome.ledger);

            let cleaned = SeriesWriter::new().render(&outcome.cleaned)?;
            let report = ReportWriter::with_format(settings.report_format).render(&outcome.ledger)?;
            write_outputs(&[
                (settings.cleaned_output.as_path(), cleaned.as_slice()),
                (settings.report_output.as_path(), report.as_slice()),
            ])?;

            println!("Cleaned series: {}", settings.cleaned_output.display());
            println!("Report: {}", settings.report_output.display());

            if let Some(dir) = &settings.comparison_dir {
                let paths =
                    ComparisonWriter::new().write_comparisons(&outcome.raw, &outcome.cleaned, dir)?;
                println!("Comparison tables: {} in {}", paths.len(), dir.display());
            }
        }

        Commands::Validate { input } => {
            println!("Validating {}", input.display());
            let outcome = check_file(&input, cli.quiet)?;

            print_stage_summaries(&outcome);
            println!("\nFinal changed values counts:\n{}", outcome.ledger);
            println!("Validation complete - no output files written");
        }

        Commands::Describe { input } => {
            let (raw, _) = ObservationReader::new().read_observations(&input)?;
            let summary = SeriesAnalyzer::new().describe(&raw);

            match raw.date_range() {
                Some((first, last)) => {
                    println!("{} records from {} to {}", raw.len(), first, last)
                }
                None => println!("No records in {}", input.display()),
            }
            println!("\n{}", summary);
        }
    }

    Ok(())
}

/// Load a file and run every check. Fails before any output on a parse error.
fn check_file(input: &Path, quiet: bool) -> Result<QcOutcome> {
    let (raw, ledger) = ObservationReader::new().read_observations(input)?;

    let pipeline = QcPipeline::new();
    let progress = ProgressReporter::new(
        pipeline.stage_count() as u64,
        "Running quality checks...",
        quiet,
    );

    let outcome = pipeline.run(raw, ledger, Some(&progress));
    progress.finish_with_message(&format!(
        "Checked {} records",
        outcome.cleaned.len()
    ));

    info!(
        "Quality control complete: {} records, {} values now missing",
        outcome.cleaned.len(),
        outcome.cleaned.missing_counts().iter().sum::<usize>()
    );

    Ok(outcome)
}

fn print_stage_summaries(outcome: &QcOutcome) {
    for stage in &outcome.stages {
        println!("\n{}:\n{}", stage.stage, stage.summary);
    }
}
