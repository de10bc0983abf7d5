mod cli;

use clap::{Parser, Subcommand};
use o11ycost::core;
use tracing_subscriber::EnvFilter;

use crate::cli::estimate_cmd::InputFlags;
use crate::core::config::AppConfig;
use crate::core::session::FileSessionStore;
use crate::core::signal::SignalType;

#[derive(Parser)]
#[command(
    name = "o11ycost",
    about = "Compare observability platform costs for metrics, tracing, logs and security data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text|json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate metrics costs from data point rate and tag cardinality
    Metrics {
        /// Data points per second before tags
        #[arg(long)]
        base_volume: Option<f64>,

        /// Tag name (repeatable); replaces the saved tags
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Drop all saved tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// Unique values per tag
        #[arg(long)]
        tag_values: Option<u32>,

        /// Metric source (opentelemetry|prometheus|statsd|vendor_agent|mixed)
        #[arg(long)]
        source_type: Option<String>,
    },
    /// Estimate tracing/APM costs from span rate
    Tracing {
        #[arg(long)]
        spans_per_second: Option<f64>,
    },
    /// Estimate log management costs from daily ingest
    Logs {
        #[arg(long)]
        gb_per_day: Option<f64>,
    },
    /// Estimate SIEM costs from event rate
    Security {
        #[arg(long)]
        events_per_second: Option<f64>,
    },
    /// List catalog platforms
    Platforms {
        /// Only this signal (metrics|tracing|logs|security)
        #[arg(short, long)]
        signal: Option<String>,
    },
    /// Show pricing details for one platform
    Show {
        /// Platform ID
        platform: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Generate default config file
    Init,
    /// Choose compared platforms interactively
    Edit,
    /// Validate config file
    Check,
    /// Include a platform in comparisons
    Add {
        /// Platform ID to enable
        platform: String,
    },
    /// Exclude a platform from comparisons
    Remove {
        /// Platform ID to disable
        platform: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default config");
            AppConfig::default()
        }
    };

    let output_opts = cli::output::OutputOptions {
        format: cli::output::OutputFormat::resolve(cli.json, cli.format.as_deref(), &config),
        pretty: cli.pretty,
        use_color: cli::output::detect_color(!cli.no_color, &config.settings.color),
    };

    let store = FileSessionStore::new();
    tracing::debug!(path = %store.path().display(), "session file");

    match cli.command {
        None => {
            cli::estimate_cmd::run(
                SignalType::all(),
                &InputFlags::default(),
                false,
                &store,
                &config,
                &output_opts,
            )?;
        }
        Some(Commands::Metrics {
            base_volume,
            tags,
            clear_tags,
            tag_values,
            source_type,
        }) => {
            let flags = InputFlags {
                base_volume,
                tags: if clear_tags {
                    Some(Vec::new())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(tags)
                },
                tag_values,
                source_type,
                ..Default::default()
            };
            cli::estimate_cmd::run(
                &[SignalType::Metrics],
                &flags,
                true,
                &store,
                &config,
                &output_opts,
            )?;
        }
        Some(Commands::Tracing { spans_per_second }) => {
            let flags = InputFlags {
                spans_per_second,
                ..Default::default()
            };
            cli::estimate_cmd::run(
                &[SignalType::Tracing],
                &flags,
                true,
                &store,
                &config,
                &output_opts,
            )?;
        }
        Some(Commands::Logs { gb_per_day }) => {
            let flags = InputFlags {
                gb_per_day,
                ..Default::default()
            };
            cli::estimate_cmd::run(&[SignalType::Logs], &flags, true, &store, &config, &output_opts)?;
        }
        Some(Commands::Security { events_per_second }) => {
            let flags = InputFlags {
                events_per_second,
                ..Default::default()
            };
            cli::estimate_cmd::run(
                &[SignalType::Security],
                &flags,
                true,
                &store,
                &config,
                &output_opts,
            )?;
        }
        Some(Commands::Platforms { signal }) => {
            cli::platforms_cmd::list(signal.as_deref(), &config, &output_opts)?;
        }
        Some(Commands::Show { platform }) => {
            cli::platforms_cmd::show(&platform, &config, &output_opts)?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => cli::config_cmd::init(&output_opts)?,
            ConfigAction::Edit => cli::config_cmd::edit(&output_opts)?,
            ConfigAction::Check => cli::config_cmd::check(&output_opts)?,
            ConfigAction::Add { platform } => cli::config_cmd::add(&platform, &output_opts)?,
            ConfigAction::Remove { platform } => {
                cli::config_cmd::remove(&platform, &output_opts)?
            }
        },
    }

    Ok(())
}
