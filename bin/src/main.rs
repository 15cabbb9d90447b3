//! bilan CLI binary.
//!
//! Reads a financial statement CSV, computes ratios, and writes an Excel
//! report plus two PNG charts.

mod data;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bilan_ratios::{DEFAULT_EPSILON, RatioConfig, RatioEngine};
use bilan_report::{ReportConfig, ReportPaths, ReportWriter};
use bilan_types::{BilanError, ensure_schema};
use clap::Parser;
use tracing::info;

/// Exit status for a missing input file and other failures.
const EXIT_FAILURE: i32 = 1;

/// Exit status when the input lacks required columns.
const EXIT_MISSING_COLUMNS: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "bilan")]
#[command(about = "Financial statement ratio analyzer", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to input CSV containing financial data
    #[arg(long)]
    input: PathBuf,

    /// Directory to save outputs
    #[arg(long, default_value = "./out")]
    outdir: PathBuf,

    /// Value added to every ratio denominator
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "BILAN_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match run(&cli) {
        Ok(paths) => print_summary(&paths),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    }
}

fn run(cli: &Cli) -> Result<ReportPaths> {
    if !cli.input.is_file() {
        return Err(BilanError::InputNotFound(cli.input.clone()).into());
    }

    let writer = ReportWriter::new(ReportConfig::new(&cli.outdir));
    writer.prepare()?;

    let statements = data::load_statements(&cli.input)?;
    ensure_schema(&statements)?;
    info!(rows = statements.len(), "Schema check passed");

    let engine = RatioEngine::new(RatioConfig::default().with_epsilon(cli.epsilon));
    let ratios = engine.compute(&statements)?;

    Ok(writer.write(&statements, &ratios)?)
}

fn print_summary(paths: &ReportPaths) {
    println!("Done.");
    println!("Excel report: {}", paths.workbook.display());
    println!("Margins chart: {}", paths.margins_chart.display());
    println!("ROA/ROE chart: {}", paths.roa_roe_chart.display());
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err
        .downcast_ref::<BilanError>()
        .and_then(BilanError::missing_columns)
    {
        Some(_) => EXIT_MISSING_COLUMNS,
        None => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const FULL_CSV: &str = "period,revenue,cogs,operating_income,net_income,total_assets,\
        total_equity,total_liabilities,current_assets,current_liabilities,cash,\
        marketable_securities,accounts_receivable,inventory,interest_expense\n\
        2022,150,80,40,25,220,120,100,60,30,15,5,10,12,2\n\
        2021,100,60,20,10,200,100,100,50,25,10,5,5,10,2\n";

    fn cli(input: &Path, outdir: &Path) -> Cli {
        Cli::try_parse_from([
            "bilan",
            "--input",
            input.to_str().unwrap(),
            "--outdir",
            outdir.to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["bilan", "--input", "fin.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("fin.csv"));
        assert_eq!(cli.outdir, PathBuf::from("./out"));
        assert!((cli.epsilon - DEFAULT_EPSILON).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["bilan"]).is_err());
    }

    #[test]
    fn test_run_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fin.csv");
        std::fs::write(&input, FULL_CSV).unwrap();
        let outdir = dir.path().join("out");

        let paths = run(&cli(&input, &outdir)).unwrap();
        assert_eq!(paths.workbook, outdir.join("financial_report.xlsx"));
        assert!(paths.workbook.is_file());
        assert!(paths.margins_chart.is_file());
        assert!(paths.roa_roe_chart.is_file());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let outdir = dir.path().join("out");

        let err = run(&cli(&dir.path().join("absent.csv"), &outdir)).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert!(err.to_string().starts_with("Input file not found"));
        assert!(!outdir.exists());
    }

    #[test]
    fn test_run_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("partial.csv");
        std::fs::write(&input, "period,revenue\n2021,100\n").unwrap();
        let outdir = dir.path().join("out");

        let err = run(&cli(&input, &outdir)).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_MISSING_COLUMNS);
        assert!(err.to_string().contains("cogs, operating_income"));
        assert!(outdir.is_dir());
        assert!(!outdir.join("financial_report.xlsx").exists());
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::new(BilanError::InputNotFound(PathBuf::from("fin.csv")));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        let err = anyhow::Error::new(BilanError::MissingColumns(vec!["cash".to_string()]));
        assert_eq!(exit_code(&err), EXIT_MISSING_COLUMNS);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), EXIT_FAILURE);
    }
}
