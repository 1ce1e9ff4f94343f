use anyhow::Result;
use clap::parser::ValueSource;
use clap::{value_parser, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use log::{debug, info};
use std::env;
use std::path::PathBuf;

mod config;
mod logging;
mod renditions;
mod selector;

use renditions::{load_catalog, Rendition, TargetQuality};
use selector::select_default;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rendition catalog to select from (JSON: a source array or a mediainfo object)
    #[arg(value_parser = value_parser!(PathBuf))]
    catalog: PathBuf,

    /// Path to the configuration file
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    config_file: Option<PathBuf>,

    /// Target quality the selected rendition must not exceed
    #[arg(
        long,
        value_enum,
        default_value_t = TargetQuality::P360,
        id = "quality"
    )]
    quality: TargetQuality,

    /// Exact target height in pixels (takes precedence over --quality)
    #[arg(long, id = "target_height")]
    target_height: Option<u32>,

    /// Output format for the selection: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Print the parsed catalog and exit
    #[arg(long, default_value_t = false)]
    probe_catalog: bool,
}

fn cli_value_provided(matches: &ArgMatches, id: &str) -> bool {
    matches
        .value_source(id)
        .is_some_and(|src| matches!(src, ValueSource::CommandLine))
}

fn apply_config_overrides(args: &mut Args, cfg: &config::Config, matches: &ArgMatches) {
    if !cli_value_provided(matches, "quality") {
        if let Some(quality) = cfg.quality {
            args.quality = quality;
        }
    }

    if args.target_height.is_none() && !cli_value_provided(matches, "target_height") {
        if cfg.target_height.is_some() {
            args.target_height = cfg.target_height;
        }
    }
}

fn describe_rendition(rendition: &Rendition) -> String {
    format!(
        "{} {}p {} B {}",
        rendition.container.to_lowercase(),
        rendition.height,
        rendition.size,
        rendition.src.as_deref().unwrap_or("-")
    )
}

fn main() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();

    let matches = Args::command().get_matches();
    let mut args = Args::from_arg_matches(&matches).expect("Failed to parse CLI arguments");

    logging::log_relevant_env();

    let loaded_config = config::load(args.config_file.as_deref())?;
    if let Some((_, source)) = &loaded_config {
        match source {
            config::ConfigSource::Cli(path) => {
                info!("Loaded configuration from '{}'.", path.display());
            }
            config::ConfigSource::Env(path) => {
                info!(
                    "Loaded configuration from '{}' (via {}).",
                    path.display(),
                    config::CONFIG_ENV_VAR
                );
            }
            config::ConfigSource::Default(path) => {
                info!("Loaded configuration from '{}'.", path.display());
            }
        }
    }
    if let Some((cfg, _)) = &loaded_config {
        apply_config_overrides(&mut args, cfg, &matches);
    }

    let sources = load_catalog(&args.catalog)?;
    debug!(
        "Loaded {} candidate renditions from '{}'",
        sources.len(),
        args.catalog.display()
    );

    if args.probe_catalog {
        match args.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sources)?),
            OutputFormat::Text => {
                for (index, rendition) in sources.iter().enumerate() {
                    println!("#{} {}", index, describe_rendition(rendition));
                }
            }
        }
        return Ok(());
    }

    let target_height = args.target_height.unwrap_or_else(|| args.quality.height());
    let selected = select_default(&sources, target_height)?;
    info!(
        "Selected {} for the {}px target.",
        describe_rendition(selected),
        target_height
    );

    // The player host owns its source list; hand it a fresh singleton set
    // rather than mutating the catalog we were given.
    let singleton = vec![selected.clone()];
    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&singleton)?),
        OutputFormat::Text => println!("{}", describe_rendition(selected)),
    }

    Ok(())
}
