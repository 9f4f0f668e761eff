use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use slcsp::config::{Config, ConfigOverrides};
use slcsp::output::json::render_report_json;
use slcsp::output::results_to_csv;
use slcsp::output::table::{render_rate_areas_table, render_results_table};
use slcsp::pipeline::{run, SlcspReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrintFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "slcsp",
    version,
    about = "Calculate the SLCSP for each zipcode."
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Path to the zips.csv file
    #[arg(long)]
    zips: Option<PathBuf>,
    /// Path to the plans.csv file
    #[arg(long)]
    plans: Option<PathBuf>,
    /// Path to the slcsp.csv file listing target zipcodes
    #[arg(long)]
    slcsp: Option<PathBuf>,
    /// Path to the output file [default: slcsp.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also render the results to stdout
    #[arg(short, long, value_enum)]
    print: Option<PrintFormat>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    if let Some(Commands::Config { init: true, show }) = &cli.command {
        Config::write_template(&config_path)?;
        println!("Wrote config template to {}", config_path.display());
        if !*show {
            return Ok(());
        }
    }
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        zips: cli.zips.clone(),
        plans: cli.plans.clone(),
        slcsp: cli.slcsp.clone(),
        output: cli.output.clone(),
    });

    if matches!(cli.command, Some(Commands::Config { .. })) {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let paths = config.resolve()?;
    info!(
        "zips={} plans={} slcsp={} output={}",
        paths.zips.display(),
        paths.plans.display(),
        paths.targets.display(),
        paths.output.display()
    );
    let report = run(&paths)?;

    let done = format!(
        "SLCSP calculation completed. Results are saved in '{}'.",
        paths.output.display()
    );
    match cli.print {
        Some(format) => {
            print_report(&report, format)?;
            eprintln!("{done}");
        }
        None => println!("{done}"),
    }
    Ok(())
}

fn print_report(report: &SlcspReport, format: PrintFormat) -> Result<()> {
    match format {
        PrintFormat::Table => {
            println!("{}", render_results_table(&report.results));
            println!("{}", render_rate_areas_table(&report.rate_areas));
            println!(
                "{} resolved, {} without a rate",
                report.resolved_count(),
                report.unresolved_count()
            );
        }
        PrintFormat::Json => println!("{}", render_report_json(report)?),
        PrintFormat::Csv => print!("{}", results_to_csv(&report.results)?),
    }
    Ok(())
}
