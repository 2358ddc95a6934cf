// Copyright 2025 Spark Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for Spark Bench.
//!
//! Reports on the benchmark log, measures data directories, and prepares
//! the project layout and Hadoop environment before a Spark run.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use sparkbench_benchmarks::{
    load_summary, markdown, print_benchmark_summary, summary, BenchmarkTimer,
};
use sparkbench_core::{
    configure_hadoop_home, ensure_directories_exist, DataFormat, ProjectPaths, Settings,
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Spark Bench CLI.
#[derive(Parser, Debug)]
#[command(name = "sparkbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output formats for the summary.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Fixed-width console table.
    Table,
    /// Markdown report.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize every benchmark recorded in the log.
    Summary {
        /// Log file override (defaults to results/benchmark_logs.csv).
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Table)]
        format: SummaryFormat,
    },

    /// Print the size of a data directory in MB.
    Size {
        /// Directory to measure.
        path: PathBuf,
    },

    /// Create the project directory layout.
    Init,

    /// Show the resolved configuration and project layout.
    Paths,

    /// Verify and apply the Hadoop environment Spark needs on Windows.
    HadoopCheck,

    /// Time a short sleep and print the summary.
    Demo {
        /// Seconds to sleep inside the measured scope.
        #[arg(short, long, default_value_t = 2.0)]
        seconds: f64,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load().context("failed to load settings")?;
    debug!(?settings, "starting");
    execute(cli.command, &settings)
}

/// Execute one command against resolved settings.
pub fn execute(command: Commands, settings: &Settings) -> Result<()> {
    let paths = settings.paths();

    match command {
        Commands::Summary { log, format } => {
            let log = log.unwrap_or(paths.log_file);
            match format {
                SummaryFormat::Table => print_benchmark_summary(&log),
                SummaryFormat::Markdown => {
                    let summary = load_summary(&log)
                        .with_context(|| format!("reading {}", log.display()))?;
                    print!("{}", markdown::generate_summary(&summary));
                }
                SummaryFormat::Json => {
                    let summary = load_summary(&log)
                        .with_context(|| format!("reading {}", log.display()))?;
                    println!("{}", markdown::generate_json(&summary)?);
                }
            }
            Ok(())
        }
        Commands::Size { path } => {
            let size = sparkbench_benchmarks::get_directory_size_mb(&path)?;
            println!("Directory size: {:.2} MB", size);
            Ok(())
        }
        Commands::Init => {
            ensure_directories_exist(&paths)?;
            Ok(())
        }
        Commands::Paths => {
            print!("{}", describe_paths(settings, &paths));
            Ok(())
        }
        Commands::HadoopCheck => hadoop_check(settings),
        Commands::Demo { seconds } => demo(&paths, seconds),
    }
}

/// Human-readable description of the configuration.
pub fn describe_paths(settings: &Settings, paths: &ProjectPaths) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        "Spark Performance Benchmark - Configuration".bold().to_string(),
        rule.clone(),
        String::new(),
        format!("Project Root: {}", paths.root.display()),
        format!("Data Directory: {}", paths.data.display()),
        format!("Results Directory: {}", paths.results.display()),
        String::new(),
        format!("Benchmark Log File: {}", paths.log_file.display()),
        String::new(),
        format!("Spark App Name: {}", settings.spark_app_name),
        format!("Spark Master: {}", settings.spark_master),
        String::new(),
        "Format Directories:".to_string(),
    ];
    for format in DataFormat::ALL {
        lines.push(format!("  - {}: {}", format, paths.format_dir(format).display()));
    }
    lines.push(String::new());
    lines.push(rule);

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn hadoop_check(settings: &Settings) -> Result<()> {
    let rule = "=".repeat(70);
    println!("{}\nHADOOP CONFIGURATION TEST\n{}\n", rule, rule);

    match configure_hadoop_home(settings).context("Hadoop configuration failed")? {
        Some(hadoop) => {
            println!(
                "\n{} Hadoop configuration completed for {}",
                "✓".green(),
                hadoop.home().display()
            );
            println!("\nNext steps:");
            println!("1. Run `sparkbench hadoop-check` before creating the Spark session");
            println!("2. Restart any running notebook kernel");
            println!("3. Re-run the benchmark; CSV writes should now succeed");
        }
        None => println!(
            "{} Hadoop native helpers are only required on Windows; nothing to do.",
            "✓".green()
        ),
    }
    println!("{}", rule);
    Ok(())
}

fn demo(paths: &ProjectPaths, seconds: f64) -> Result<()> {
    println!("BenchmarkTimer Demo\n");

    let sleep = Duration::try_from_secs_f64(seconds)
        .with_context(|| format!("invalid demo duration: {}", seconds))?;
    let mut timer =
        BenchmarkTimer::new("Demo Test", &paths.log_file).description("Testing the timer");
    timer.measure(|| {
        thread::sleep(sleep);
        Ok::<_, std::io::Error>(())
    })?;

    println!("\nMeasured duration: {:.2} seconds", timer.duration().unwrap_or_default());
    print!("{}", summary::render_table(&load_summary(&paths.log_file)?));
    Ok(())
}
