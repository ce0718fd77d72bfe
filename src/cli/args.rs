use crate::writers::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-qc")]
#[command(about = "Quality control for single-site daily climate series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only log warnings and hide progress"
    )]
    pub quiet: bool,

    #[arg(long, global = true, help = "Settings file (toml, json, yaml, ...)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all quality checks and write the cleaned series and report
    Run {
        #[arg(short, long, help = "Raw observation file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Cleaned series output [default: After_DataQualityCheck.txt]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Failed checks report [default: Failed_Checks.txt]")]
        report: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        #[arg(long, help = "Directory for before/after comparison tables")]
        comparison_dir: Option<PathBuf>,
    },

    /// Run all quality checks and print the results without writing files
    Validate {
        #[arg(short, long, help = "Raw observation file")]
        input: PathBuf,
    },

    /// Print descriptive statistics of the raw observations
    Describe {
        #[arg(short, long, help = "Raw observation file")]
        input: PathBuf,
    },
}
