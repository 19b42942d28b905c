mod viewer;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use motionlab_core::runtime::{evaluate_detectors, load_scenario};
use motionlab_core::{analyze_scenario, build_simulation_context, step_simulation};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "motionlab")]
#[command(about = "MotionLab - 2D particle and rigid-body motion scenarios", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario to completion and print its detectors
    Run {
        /// Path to the scenario YAML file
        file: PathBuf,
        /// Override the scenario's step count
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Check a scenario for errors without running it
    Check {
        file: PathBuf,
    },
    /// Open a scenario in the interactive viewer; edits reload live
    View {
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { file, steps } => run_file(&file, steps),
        Commands::Check { file } => check_file(&file),
        Commands::View { file } => viewer::run(file),
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn run_file(file: &Path, steps: Option<u32>) -> Result<()> {
    let mut scenario = load_scenario(&read_source(file)?)?;
    if let Some(steps) = steps {
        scenario.steps = steps;
    }

    let (mut ctx, diagnostics) = build_simulation_context(scenario)?;
    for warning in diagnostics.warnings() {
        eprintln!("{}", warning);
    }

    while !step_simulation(&mut ctx)
        .with_context(|| format!("step {} failed", ctx.current_step + 1))?
    {}

    for detector in evaluate_detectors(&ctx.scenario, &ctx.world)? {
        println!("{} = {}", detector.name, detector.value);
    }
    Ok(())
}

fn check_file(file: &Path) -> Result<()> {
    let scenario = load_scenario(&read_source(file)?)?;
    let diagnostics = analyze_scenario(&scenario);
    for diagnostic in diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }
    if diagnostics.has_errors() {
        bail!(
            "{} has {} error(s)",
            file.display(),
            diagnostics.errors().count()
        );
    }
    println!("{}: ok", file.display());
    Ok(())
}
