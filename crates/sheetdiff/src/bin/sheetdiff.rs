use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheetdiff::{
    ColumnOrder, CompareOptions, ComparisonReport, TableSource, render_text, try_compare_sources,
    write_csv, write_csv_to_string, write_json_to_string,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sheetdiff",
    version,
    about = "Report cell-level differences between two spreadsheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the first sheet of two workbooks.
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// First workbook (.xlsx, .xls, .xlsb, .ods).
    #[arg(short = 'a', long)]
    first: PathBuf,

    /// Second workbook.
    #[arg(short = 'b', long)]
    second: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Column order within a row: sorted or first-seen.
    #[arg(long, default_value = "sorted")]
    column_order: String,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Print a summary line to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &CompareArgs) -> Result<CompareOptions> {
    let column_order = ColumnOrder::from_str(&args.column_order)
        .map_err(|error| anyhow!("{error}"))
        .context("failed to parse --column-order")?;

    Ok(CompareOptions { column_order })
}

fn delimiter_byte(args: &CompareArgs) -> Result<u8> {
    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }
    Ok(args.delimiter as u8)
}

fn emit_report(report: &ComparisonReport, args: &CompareArgs) -> Result<()> {
    let rendered = match args.format {
        OutputFormat::Csv => {
            let delimiter = delimiter_byte(args)?;
            if let Some(path) = &args.output {
                write_csv(path, &report.differences, delimiter)
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                return Ok(());
            }
            write_csv_to_string(&report.differences, delimiter)?
        }
        OutputFormat::Json => write_json_to_string(&report.differences)?,
        OutputFormat::Text => render_text(&report.differences),
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn log_summary(report: &ComparisonReport, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!(
        "compared {} row(s) across {} column(s): {} difference(s) (first has {} row(s), second has {})",
        report.rows_examined,
        report.columns.len(),
        report.differences.len(),
        report.rows_in_first,
        report.rows_in_second
    );
}

fn run_compare(args: &CompareArgs) -> Result<ComparisonReport> {
    let options = parse_options(args)?;
    let report = try_compare_sources(
        &TableSource::from(args.first.clone()),
        &TableSource::from(args.second.clone()),
        &options,
    )
    .with_context(|| {
        format!(
            "failed to compare '{}' with '{}'",
            args.first.display(),
            args.second.display()
        )
    })?;
    emit_report(&report, args)?;
    Ok(report)
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sheetdiff=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compare(args) => match run_compare(&args) {
            Ok(report) => {
                log_summary(&report, args.verbose);
                if report.is_identical() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(2)
            }
        },
    }
}
