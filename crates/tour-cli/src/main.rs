//! tour CLI.
//!
//! Runs small lessons on everyday language features and prints what each
//! one would print.
//!
//! # Quick Start
//!
//! ```bash
//! # See what is available
//! tour list
//!
//! # Run one lesson, or all of them
//! tour runes
//! tour all
//!
//! # Feed the runes lesson raw (possibly invalid) bytes
//! tour runes --hex "6f c3 6c"
//! ```

mod commands;
mod style;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tour_config::{ConfigLoader, OutputFormat, TourConfig};

/// tour - small lessons on everyday language features.
#[derive(Parser)]
#[command(name = "tour")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory containing tour.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: String,

    /// Output format (overrides output.format from config).
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Write a tour.toml with the default lesson inputs.
    Init {
        /// Directory to initialize.
        #[arg(default_value = ".")]
        path: String,
    },

    /// List available lessons.
    List,

    /// Run every lesson in order.
    All,

    /// Branching with if, else if, and else.
    Conditions {
        /// Value classified as negative, single digit, or multiple digits.
        #[arg(short, long, allow_hyphen_values = true)]
        number: Option<i64>,

        /// Value tested for parity.
        #[arg(long, allow_hyphen_values = true)]
        parity_of: Option<i64>,

        /// Divisor used in the divisibility check.
        #[arg(long, allow_hyphen_values = true)]
        divisor: Option<i64>,
    },

    /// Insert, look up, and delete map entries.
    Maps,

    /// Bytes versus code points in UTF-8 text.
    Runes {
        /// Text to decode.
        #[arg(short, long, conflicts_with = "hex")]
        text: Option<String>,

        /// Raw bytes to decode, as space-separated hex (e.g. "6f 6c c3 a1").
        #[arg(long)]
        hex: Option<String>,
    },

    /// Configuration management commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Rendering of the configuration (text, json, toml).
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr so lesson output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(project: &str, format: Option<FormatArg>, no_color: bool) -> Result<TourConfig> {
    let mut config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .with_context(|| format!("Failed to load configuration from {project}"))?;

    if let Some(format) = format {
        config.output.format = format.into();
    }
    if no_color {
        config.output.color = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let Cli {
        project,
        format,
        no_color,
        verbose,
        command,
    } = Cli::parse();
    init_logging(verbose);

    // Init must work without a loadable config.
    let mut config = if matches!(command, Commands::Init { .. }) {
        let mut config = TourConfig::default();
        config.output.color = !no_color;
        config
    } else {
        load_config(&project, format, no_color)?
    };
    style::set_no_color(!config.output.color);

    match command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Init { path } => commands::init::run(&path),
        Commands::List => commands::list::run(config.output.format),
        Commands::All => commands::lesson::run_all(&config),
        Commands::Conditions {
            number,
            parity_of,
            divisor,
        } => {
            if let Some(number) = number {
                config.conditions.scoped = number;
            }
            if let Some(parity_of) = parity_of {
                config.conditions.parity_of = parity_of;
            }
            if let Some(divisor) = divisor {
                config.conditions.divisor = divisor;
            }
            commands::lesson::run_one(tour::Lesson::Conditions, &config)
        }
        Commands::Maps => commands::lesson::run_one(tour::Lesson::Maps, &config),
        Commands::Runes { text, hex } => match hex {
            Some(hex) => commands::lesson::run_runes_hex(&hex, &config),
            None => {
                if let Some(text) = text {
                    config.runes.text = text;
                }
                commands::lesson::run_one(tour::Lesson::Runes, &config)
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { output } => commands::config::show(&config, &output),
        },
    }
}
