//! Recycling Dashboard CLI
//!
//! Offline access to the dashboard's data and figures:
//! - List areas and periods
//! - Print an area's summary statistics
//! - Print chart figures as JSON
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use recycling_dashboard::config::generate_default_config;
use recycling_dashboard::data::DEFAULT_NATIONAL_AREA;
use recycling_dashboard::{RecyclingBarChart, RecyclingChart, RecyclingData};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "recycling-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect household recycling statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recycling dataset CSV (default: bundled dataset)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Area to compare against
    #[arg(long, default_value = DEFAULT_NATIONAL_AREA, global = true)]
    pub national_area: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List areas
    Areas,

    /// List reporting periods
    Periods,

    /// Show summary statistics for an area
    Stats {
        /// Area name
        area: String,
    },

    /// Print a chart figure as JSON
    Chart {
        #[command(subcommand)]
        chart: ChartCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ChartCommand {
    /// Recycling rate of an area compared to the national area
    Area {
        /// Area name
        area: String,
    },
    /// Recycling rates of all areas in a period
    Year {
        /// Period label (default: latest)
        period: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.format.eq_ignore_ascii_case("json");

    let data_path = cli.data.clone();
    let national_area = cli.national_area.clone();
    let load = move || -> anyhow::Result<Arc<RecyclingData>> {
        let data = RecyclingData::load_or_bundled(data_path.as_deref(), &national_area)
            .context("failed to load recycling dataset")?;
        Ok(Arc::new(data))
    };

    match cli.command {
        Commands::Areas => {
            let data = load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(data.area_list())?);
            } else {
                for area in data.area_list() {
                    println!("{}", area);
                }
            }
        }

        Commands::Periods => {
            let data = load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(data.periods())?);
            } else {
                for period in data.periods() {
                    println!("{}", period);
                }
            }
        }

        Commands::Stats { area } => {
            let data = load()?;
            let summary = data.process_data_for_area(&area)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let formatted = summary.formatted();
                println!("{}", summary.area);
                println!("{:<28} {}", "Latest period:", summary.latest_period);
                println!("{:<28} {}", "Latest rate:", formatted.latest_rate);
                println!(
                    "{:<28} {}",
                    format!("Compared to {}:", summary.national_area),
                    formatted.compare_to_eng
                );
                println!("{:<28} {}", "Compared to previous year:", formatted.change_area);
                println!(
                    "{:<28} {} ({})",
                    "Best period:", formatted.best_period, formatted.best_rate
                );
            }
        }

        Commands::Chart { chart } => {
            let data = load()?;
            let figure = match chart {
                ChartCommand::Area { area } => {
                    RecyclingChart::new(Arc::clone(&data)).create_chart(&area)?
                }
                ChartCommand::Year { period } => {
                    let chart = RecyclingBarChart::new(Arc::clone(&data));
                    match period {
                        Some(period) => chart.create_chart(&period)?,
                        None => chart.create_latest_chart()?,
                    }
                }
            };
            println!("{}", serde_json::to_string_pretty(&figure)?);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
