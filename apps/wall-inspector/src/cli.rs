//! Command-line arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wall_core::WallConfig;

#[derive(Parser)]
#[command(name = "wall-inspector")]
#[command(about = "Ice and cost queries over a simulated ice-wall build")]
#[command(version)]
pub struct Cli {
    /// Layout file: one profile per line, space-separated section heights.
    #[arg(short, long, global = true, default_value = "input_config")]
    pub input: PathBuf,

    /// JSON configuration file; missing fields take their defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the number of work teams.
    #[arg(long, global = true)]
    pub teams: Option<u32>,

    /// Override the target section height.
    #[arg(long, global = true)]
    pub target_height: Option<u32>,

    /// Override the per-day work pause, in milliseconds.
    #[arg(long, global = true)]
    pub day_pause_ms: Option<u64>,

    /// Cap the worker threads used per day.
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ice used on one profile on one day.
    Ice {
        profile: u32,
        day:     u32,
    },

    /// Cost of one profile up to and including a day.
    ProfileCost {
        profile: u32,
        day:     u32,
    },

    /// Cost of the whole wall, up to a day or to completion.
    Cost {
        #[arg(long)]
        day: Option<u32>,
    },

    /// Answer a route such as `1/days/3/` or `overview/`.
    Query {
        route: String,
    },

    /// Print the per-day, per-profile feet table as JSON.
    Table {
        #[arg(long)]
        day: Option<u32>,
    },

    /// Write the per-day table with ice and cost columns as CSV.
    Export {
        path: PathBuf,

        #[arg(long)]
        day: Option<u32>,
    },

    /// Write a random layout instead of running a query.
    Generate {
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

impl Cli {
    /// The configuration file (if any) with command-line overrides applied.
    pub fn wall_config(&self) -> Result<WallConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => WallConfig::default(),
        };
        if let Some(teams) = self.teams {
            config.number_of_teams = teams;
        }
        if let Some(height) = self.target_height {
            config.target_height = height;
        }
        if let Some(pause) = self.day_pause_ms {
            config.day_pause_ms = pause;
        }
        if self.threads.is_some() {
            config.num_threads = self.threads;
        }
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<WallConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
