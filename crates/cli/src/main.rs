mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use stride_core::geometry::{RingGeometry, bar_series, week_window};
use stride_core::views::bar_chart::render_bar_chart;
use stride_core::views::dashboard::render_dashboard;
use stride_core::views::date_strip::{render_date_strip, today_index};
use stride_core::views::line_chart::{default_labels, render_line_chart};
use stride_core::views::progress_ring::{RingLabel, render_progress_ring};
use stride_protocol::{Insets, Viewport};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::output::{Format, Frame};

#[derive(Parser)]
#[command(
    name = "stride",
    about = "Render stride fitness dashboard views",
    long_about = "Render progress rings, line charts, date strips and the composed Today dashboard as SVG or JSON render commands."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(long, short, global = true)]
    out: Option<PathBuf>,

    /// Use the light palette
    #[arg(long, global = true)]
    light: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Progress ring for a goal
    Ring {
        #[arg(long, allow_negative_numbers = true)]
        progress: f64,
        #[arg(long, default_value_t = 240.0)]
        diameter: f64,
        #[arg(long, default_value_t = 16.0)]
        stroke: f64,
        /// Text in the middle of the ring
        #[arg(long)]
        label: Option<String>,
    },
    /// Line chart of a sample series
    Chart {
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        samples: Vec<f64>,
        #[arg(long, value_delimiter = ',')]
        labels: Vec<String>,
        #[arg(long)]
        highlight: Option<usize>,
        #[arg(long, default_value_t = 320.0)]
        width: f64,
        #[arg(long, default_value_t = 160.0)]
        height: f64,
    },
    /// Seven-day date strip centered on a date
    Week {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Selected chip index; defaults to the reference date
        #[arg(long)]
        selected: Option<usize>,
    },
    /// Weekly bar chart
    Bars {
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        samples: Vec<f64>,
        #[arg(long, default_value_t = 100.0)]
        full_scale: f64,
    },
    /// Today dashboard: date strip, step ring and weekly chart
    Dashboard {
        /// TOML file describing the dashboard
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut light = cli.light;
    let frame = match cli.command {
        Command::Ring {
            progress,
            diameter,
            stroke,
            label,
        } => {
            let geometry = RingGeometry::new(diameter, stroke);
            let label = label.map(RingLabel::new);
            let commands = render_progress_ring(progress, &geometry, label.as_ref());
            if commands.is_empty() {
                anyhow::bail!("stroke {stroke} leaves no ring inside diameter {diameter}");
            }
            Frame::new(diameter, diameter, commands)
        }
        Command::Chart {
            samples,
            labels,
            highlight,
            width,
            height,
        } => {
            let labels = if labels.is_empty() {
                default_labels()
            } else {
                labels
            };
            let viewport = Viewport::new(
                width,
                height,
                stride_core::geometry::series_path::CHART_PADDING,
            );
            let commands = render_line_chart(&samples, &labels, highlight, &viewport)
                .context("failed to build chart")?;
            Frame::new(width, height, commands)
        }
        Command::Week { date, selected } => {
            let reference = date.unwrap_or_else(|| Local::now().date_naive());
            let days = week_window(reference);
            let selected = selected.or_else(|| today_index(&days));
            let viewport = Viewport::new(520.0, 64.0, Insets::new(8.0, 16.0, 8.0, 16.0));
            info!(%reference, "rendering date strip");
            Frame::new(
                viewport.width,
                viewport.height,
                render_date_strip(&days, selected, &viewport),
            )
        }
        Command::Bars {
            samples,
            full_scale,
        } => {
            let bars = bar_series(&samples, full_scale, 100.0).context("failed to build bars")?;
            let viewport = Viewport::new(320.0, 130.0, Insets::new(0.0, 0.0, 30.0, 0.0));
            Frame::new(
                viewport.width,
                viewport.height,
                render_bar_chart(&bars, &default_labels(), &viewport),
            )
        }
        Command::Dashboard { config } => {
            let config = match config {
                Some(path) => DashboardConfig::load(&path)?,
                None => DashboardConfig::default(),
            };
            light |= config.light;
            let input = config.to_input(Local::now().date_naive());
            info!(date = %input.reference_date, progress = input.progress, "rendering dashboard");
            let dashboard = render_dashboard(&input).context("failed to build dashboard")?;
            Frame::new(dashboard.width, dashboard.height, dashboard.commands)
        }
    };

    let rendered = frame.render(cli.format, !light)?;
    output::write(cli.out.as_deref(), &rendered)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
