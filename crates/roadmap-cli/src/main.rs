//! Roadmap CLI - structured implementation roadmaps
//!
//! Usage:
//!   roadmap init [PATH]             Write default configuration
//!   roadmap render <FILE>           Render a roadmap file as Markdown or JSON
//!   roadmap example                 Render the built-in sample roadmap
//!   roadmap estimate                Velocity-based duration estimate
//!   roadmap summary <FILE>          Show counts and totals for a roadmap

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roadmap_core::{Capacity, OutputFormat, RoadmapConfig};
use roadmap_planning::{notification_system_roadmap, Roadmap, RoadmapGenerator, RoadmapSummary};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(author, version, about = "Structured implementation roadmaps with effort estimates")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Project directory holding `.roadmap/config.toml`
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default configuration to `.roadmap/config.toml`
    Init {
        /// Project path (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also write the sample roadmap as `.roadmap/roadmap.json`
        #[arg(long)]
        example: bool,
    },

    /// Render a roadmap JSON file
    Render {
        /// Roadmap input file (JSON)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render the built-in sample roadmap
    Example {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Estimate duration from story points and team velocity
    Estimate {
        /// Total story points
        #[arg(long)]
        points: u32,

        /// Number of people on the team
        #[arg(long)]
        team_size: u32,

        /// Points per person per week (defaults to config)
        #[arg(long)]
        velocity: Option<f64>,

        /// Schedule buffer, 0.25 = 25% (defaults to config)
        #[arg(long)]
        buffer: Option<f64>,
    },

    /// Show counts and totals for a roadmap file
    Summary {
        /// Roadmap input file (JSON)
        file: PathBuf,

        /// Team capacity in hours per week (defaults to config)
        #[arg(long)]
        capacity: Option<f64>,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (defaults to config)
    #[arg(short, long)]
    format: Option<CliFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON indentation (defaults to config)
    #[arg(long)]
    indent: Option<usize>,

    /// Team capacity in hours per week (defaults to config)
    #[arg(long)]
    capacity: Option<f64>,
}

/// CLI-friendly format enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Markdown,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Markdown => OutputFormat::Markdown,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RoadmapConfig::load_or_default(&cli.project_dir)
        .context("Failed to load roadmap configuration")?;

    match cli.command {
        Commands::Init { path, example } => cmd_init(&path, example),
        Commands::Render { file, output } => {
            let roadmap = load_roadmap(&file)?;
            cmd_render(&roadmap, &output, &config)
        }
        Commands::Example { output } => cmd_render(&notification_system_roadmap(), &output, &config),
        Commands::Estimate {
            points,
            team_size,
            velocity,
            buffer,
        } => cmd_estimate(points, team_size, velocity, buffer, &config),
        Commands::Summary { file, capacity } => cmd_summary(&file, capacity, &config),
    }
}

fn cmd_init(path: &Path, example: bool) -> Result<()> {
    info!("Initializing roadmap config in {:?}", path);

    RoadmapConfig::write_default(path).context("Failed to write configuration")?;
    println!("Initialized roadmap in {:?}", path);
    println!("Created:");
    println!("  .roadmap/config.toml");

    if example {
        let roadmap_path = path.join(".roadmap/roadmap.json");
        std::fs::write(
            &roadmap_path,
            serde_json::to_string_pretty(&notification_system_roadmap())?,
        )
        .context("Failed to write example roadmap")?;
        println!("  .roadmap/roadmap.json");
        println!("\nNext steps:");
        println!("  1. Edit .roadmap/roadmap.json to describe your project");
        println!("  2. Run 'roadmap render .roadmap/roadmap.json' to produce Markdown");
    }

    Ok(())
}

fn load_roadmap(file: &Path) -> Result<Roadmap> {
    debug!("Loading roadmap from {:?}", file);
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read roadmap file {:?}", file))?;
    let roadmap: Roadmap =
        serde_json::from_str(&content).context("Failed to parse roadmap JSON")?;
    Ok(roadmap)
}

fn resolve_capacity(flag: Option<f64>, config: &RoadmapConfig) -> Result<Capacity> {
    let capacity = match flag {
        Some(hours) => Capacity::new(hours)?,
        None => config.estimation.capacity()?,
    };
    Ok(capacity)
}

fn cmd_render(roadmap: &Roadmap, args: &OutputArgs, config: &RoadmapConfig) -> Result<()> {
    let capacity = resolve_capacity(args.capacity, config)?;
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.default_format);

    info!("Rendering {} as {}", roadmap.project_name, format);

    let rendered = match format {
        OutputFormat::Markdown => roadmap.to_markdown(capacity),
        OutputFormat::Json => {
            let indent = args.indent.unwrap_or(config.output.json_indent);
            roadmap.to_json(capacity, indent)?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("Wrote {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn cmd_estimate(
    points: u32,
    team_size: u32,
    velocity: Option<f64>,
    buffer: Option<f64>,
    config: &RoadmapConfig,
) -> Result<()> {
    let mut generator = RoadmapGenerator::from_config(&config.estimation);
    if let Some(buffer) = buffer {
        generator.buffer_percentage = buffer;
    }
    let velocity = velocity.unwrap_or(config.estimation.velocity_per_person);

    let weeks = generator.estimate_duration_with_velocity(points, team_size, velocity)?;

    println!("Duration Estimate");
    println!("=================");
    println!("  Story points: {}", points);
    println!("  Team size: {}", team_size);
    println!("  Velocity: {} points/person/week", velocity);
    println!("  Buffer: {:.0}%", generator.buffer_percentage * 100.0);
    println!("  Estimated duration: ~{:.1} weeks", weeks);

    Ok(())
}

fn cmd_summary(file: &Path, capacity: Option<f64>, config: &RoadmapConfig) -> Result<()> {
    let roadmap = load_roadmap(file)?;
    let capacity = resolve_capacity(capacity, config)?;
    print!("{}", RoadmapSummary::new(&roadmap, capacity));
    Ok(())
}
