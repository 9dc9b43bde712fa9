//! @ai:module:intent CLI for matrix-multiplication benchmark plots
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mmbench_plot::{
    config::{AxisScale, PlotConfig},
    pipeline,
    render::{JsonExporter, MarkdownSummary, OutputGenerator},
};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "plot.toml";

#[derive(Parser)]
#[command(name = "mmbench-plot")]
#[command(about = "Plot matrix-multiplication benchmark timings by matrix size")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate reports and render charts
    Plot {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory for charts and exports
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Axis scale of the charts
        #[arg(long, value_enum)]
        scale: Option<Scale>,
    },

    /// Aggregate reports and print the ordered series
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of Markdown tables
        #[arg(long)]
        json: bool,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing report files
    #[arg(short, long)]
    reports: Option<PathBuf>,

    /// Reference report file name inside the reports directory
    #[arg(long)]
    reference: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scale {
    Linear,
    LogLog,
    Both,
}

impl From<Scale> for AxisScale {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Linear => AxisScale::Linear,
            Scale::LogLog => AxisScale::LogLog,
            Scale::Both => AxisScale::Both,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mmbench_plot=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plot {
            input,
            output,
            scale,
        } => plot(input, output, scale),
        Commands::Summary { input, json } => summary(input, json),
        Commands::Init { output } => init_config(output),
    }
}

/// @ai:intent Aggregate every report, then write charts and exports
/// @ai:effects fs:read, fs:write
fn plot(input: InputArgs, output: Option<PathBuf>, scale: Option<Scale>) -> Result<()> {
    let mut config = load_config(&input)?;

    if let Some(output) = output {
        config.paths.output_dir = output;
    }
    if let Some(scale) = scale {
        config.chart.scale = scale.into();
    }

    // Aggregation must finish before anything is written.
    let outcome = pipeline::run(&config)?;

    let generator = OutputGenerator::new(config.chart.clone());
    let files = generator.generate_all(&outcome, &config.paths.output_dir)?;

    println!("Generated in {}:", config.paths.output_dir.display());
    for file in &files {
        println!("  - {}", file);
    }

    Ok(())
}

/// @ai:intent Print the ordered series without rendering charts
/// @ai:effects fs:read, io
fn summary(input: InputArgs, json: bool) -> Result<()> {
    let config = load_config(&input)?;
    let outcome = pipeline::run(&config)?;

    if json {
        println!("{}", JsonExporter::render(&outcome)?);
    } else {
        print!("{}", MarkdownSummary::render(&outcome)?);
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = PlotConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults, then apply CLI overrides
/// @ai:effects fs:read
fn load_config(input: &InputArgs) -> Result<PlotConfig> {
    let mut config = match &input.config {
        Some(path) => PlotConfig::load(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG);

            if default_path.exists() {
                PlotConfig::load(&default_path)?
            } else {
                PlotConfig::default()
            }
        }
    };

    if let Some(reports) = &input.reports {
        config.paths.reports_dir = reports.clone();
    }
    if let Some(reference) = &input.reference {
        config.paths.reference_report = reference.clone();
    }

    tracing::debug!("Using configuration: {:?}", config);
    Ok(config)
}
