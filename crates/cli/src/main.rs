use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use padnav_engine::config::{default_config_path, load_config_from_path};
use padnav_engine::{NavigationOptions, Navigator};
use padnav_types::{ConfigPatch, Direction, FallbackStrategy, NavigationMode};

mod config_cmd;
mod scene;

use scene::SceneHost;

#[derive(Parser)]
#[command(name = "padnav", version, about = "Spatial D-pad navigation over JSON scenes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to $PADNAV_CONFIG_PATH, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured mode: geometric or directional
    #[arg(long, global = true)]
    mode: Option<NavigationMode>,

    /// Override the configured fallback: none, nearest or wrap
    #[arg(long, global = true)]
    fallback: Option<FallbackStrategy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay key presses against a scene, printing focus after each one
    Navigate {
        #[arg(long)]
        scene: PathBuf,

        /// Only consider items in this container
        #[arg(long)]
        scope: Option<String>,

        /// Directions to press, in order
        #[arg(required = true)]
        directions: Vec<String>,
    },

    /// Print the item focus would move to from a given item
    Next {
        #[arg(long)]
        scene: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        scope: Option<String>,

        direction: Direction,
    },

    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Restore the defaults
    Reset,
    /// Set one or more values, e.g. `mode=directional coneAngle=45`
    Set {
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let overrides = ConfigPatch {
        mode: cli.mode,
        fallback: cli.fallback,
        ..ConfigPatch::default()
    };

    match cli.command {
        Commands::Navigate { scene, scope, directions } => {
            let navigator = navigator(&config_path, &overrides)?;
            let mut host = SceneHost::load(&scene)?;
            for line in replay(&navigator, &mut host, scope.as_deref(), &directions)? {
                println!("{line}");
            }
        }
        Commands::Next {
            scene,
            from,
            scope,
            direction,
        } => {
            let navigator = navigator(&config_path, &overrides)?;
            let host = SceneHost::load(&scene)?;
            let next = next_from(&navigator, &host, &from, scope.as_deref(), direction)?;
            println!("{}", next.as_deref().unwrap_or("null"));
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config_cmd::show(&config_path, &overrides)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Reset => {
                config_cmd::reset(&config_path)?;
                println!("reset {}", config_path.display());
            }
            ConfigAction::Set { assignments } => {
                let patch = config_cmd::set(&config_path, &assignments)?;
                println!("{}", serde_json::to_string_pretty(&patch)?);
            }
        },
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the configuration file and applies command-line overrides.
fn navigator(path: &Path, overrides: &ConfigPatch) -> Result<Navigator> {
    let config = load_config_from_path(path).with_context(|| format!("loading configuration {}", path.display()))?;
    let mut navigator = Navigator::with_config(config)?;
    navigator.configure(overrides)?;
    Ok(navigator)
}

/// Presses each direction in turn, reporting `direction -> focused id`.
fn replay(navigator: &Navigator, host: &mut SceneHost, scope: Option<&str>, directions: &[String]) -> Result<Vec<String>> {
    let options = NavigationOptions {
        scope,
        candidates: None,
    };
    let mut lines = Vec::with_capacity(directions.len());
    for direction in directions {
        let moved = navigator.navigate_named(host, direction, &options)?;
        let focused = match (moved, host.focused()) {
            (true, Some(id)) => id.to_string(),
            _ => "(no move)".to_string(),
        };
        lines.push(format!("{direction} -> {focused}"));
    }
    Ok(lines)
}

fn next_from(navigator: &Navigator, host: &SceneHost, from: &str, scope: Option<&str>, direction: Direction) -> Result<Option<String>> {
    let origin = host.item(from)?;
    let options = NavigationOptions {
        scope,
        candidates: None,
    };
    Ok(navigator
        .find_next_focusable(host, origin, direction, &options)
        .map(|item| item.id))
}
