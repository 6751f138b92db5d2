//! wall-inspector — answer ice and cost questions about a wall build.
//!
//! Reads a layout file, simulates the teams working it, and prints the
//! answer as JSON on stdout.  A day the simulation never reaches is
//! answered with `{"message": ...}` and exit status 2.  Log output goes to
//! stderr and is controlled by `RUST_LOG` (default `warn`).

mod cli;
mod progress;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use wall_core::{Day, ProfileNumber, WallConfig, WallLayout};
use wall_input::{GeneratorParams, InputFormat, generate_layout, load_layout_file, write_layout, write_layout_file};
use wall_inspect::{Query, WallInspector, write_day_table_file};

use cli::{Cli, Command};
use progress::ProgressLog;

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.wall_config()?;

    let query = match cli.command {
        Command::Generate { out, seed } => {
            generate(&config, out.as_deref(), seed)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Table { day } => {
            let inspector = WallInspector::new(config, &load(&cli.input)?)?;
            let table = inspector.engine().run(day.map(Day), &mut ProgressLog::default())?;
            print_json(&table)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Export { path, day } => {
            let inspector = WallInspector::new(config, &load(&cli.input)?)?;
            let table = inspector.engine().run(day.map(Day), &mut ProgressLog::default())?;
            write_day_table_file(&table, inspector.costs(), &path)
                .with_context(|| format!("writing report {}", path.display()))?;
            info!(path = %path.display(), days = table.len(), "report written");
            return Ok(ExitCode::SUCCESS);
        }
        Command::Ice { profile, day } => Query::IceOnDay { profile: ProfileNumber(profile), day: Day(day) },
        Command::ProfileCost { profile, day } => {
            Query::ProfileCost { profile: ProfileNumber(profile), day: Day(day) }
        }
        Command::Cost { day } => Query::FullCost { day: day.map(Day) },
        Command::Query { route } => route.parse()?,
    };

    let inspector = WallInspector::new(config, &load(&cli.input)?)?;
    let response = inspector.answer(query)?;
    print_json(&response)?;
    Ok(if response.is_rejected() { ExitCode::from(2) } else { ExitCode::SUCCESS })
}

fn load(path: &Path) -> Result<WallLayout> {
    load_layout_file(path).with_context(|| format!("loading layout {}", path.display()))
}

fn generate(config: &WallConfig, out: Option<&Path>, seed: u64) -> Result<()> {
    let params = GeneratorParams { target_height: config.target_height, ..GeneratorParams::default() };
    let layout = generate_layout(&params, seed)?;
    match out {
        Some(path) => {
            write_layout_file(&layout, path)
                .with_context(|| format!("writing layout {}", path.display()))?;
            info!(path = %path.display(), profiles = layout.profile_count(), "layout written");
        }
        None => write_layout(&layout, std::io::stdout().lock(), &InputFormat::default())?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
