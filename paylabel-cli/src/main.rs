//! Paylabel CLI - render button labels, wallet labels and tags for inspection
//!
//! Usage:
//!   paylabel logo [--color blue]
//!   paylabel label --options label.json
//!   paylabel wallet --options wallet.json --format json
//!   paylabel tag --lang de --multiple
//!   paylabel plan --text "Pay in 4" [--css]
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use paylabel_dom::{NodeId, RenderTree, print_tree};
use paylabel_funding::{
    BeaconDelivery, LabelOptions, Locale, LogoColor, RenderConfig, RenderEnv, RenderMode,
    StaticContentTable, TagOptions, WalletLabelOptions, dispatch_beacons, label, logo,
    plan_personalization, tag, wallet_label,
};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Paylabel - PayPal button label renderer
#[derive(Parser, Debug)]
#[command(name = "paylabel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # PayPal logo in blue
    paylabel logo --color blue

    # Label with personalization, as HTML
    paylabel label --options label.json

    # Wallet label as a JSON tree, back-end pass
    paylabel wallet --options wallet.json --format json --backend

    # Tag for German multiple buttons
    paylabel tag --lang de --multiple

    # Personalization style sheet
    paylabel plan --text "Pay in 4" --css
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Render configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Force a back-end pass
    #[arg(long, global = true)]
    backend: bool,

    /// Force test mode
    #[arg(long, global = true)]
    test_mode: bool,

    /// Tag content table replacing the built-in copy (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Output format for rendered trees
    #[arg(long, global = true, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Serialized markup
    Html,
    /// Nested JSON snapshot
    Json,
    /// Indented tree dump
    Tree,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// The PayPal logo
    Logo {
        /// Logo colour
        #[arg(long, default_value = "default")]
        color: LogoColor,
    },
    /// The button label with personalization
    Label {
        /// Label options file (JSON)
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Personalization text, overriding the options file
        #[arg(long)]
        text: Option<String>,

        /// Fire impression beacons found in the output (logged only)
        #[arg(long)]
        fire_beacons: bool,
    },
    /// A wallet instrument label
    Wallet {
        /// Wallet label options file (JSON)
        #[arg(long, value_name = "FILE")]
        options: PathBuf,
    },
    /// The tagline under the buttons
    Tag {
        /// Language code
        #[arg(long, default_value = "en")]
        lang: String,

        /// Country code
        #[arg(long)]
        country: Option<String>,

        /// More than one button is rendered
        #[arg(long)]
        multiple: bool,
    },
    /// The personalization timing plan
    Plan {
        /// Personalization text; omit for the plain plan
        #[arg(long)]
        text: Option<String>,

        /// Print the style sheet instead of the plan
        #[arg(long)]
        css: bool,
    },
}

/// Logs beacons instead of sending them.
struct LoggedBeacons;

impl BeaconDelivery for LoggedBeacons {
    fn fire(&self, url: &str, nonce: Option<&str>) {
        info!(url, nonce, "beacon");
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let env = build_env(&cli)?;

    match &cli.command {
        Command::Logo { color } => {
            show(&cli, "Logo", Some(&logo(&env, *color)))?;
        }
        Command::Label {
            options,
            text,
            fire_beacons,
        } => {
            let mut opts: LabelOptions = match options {
                Some(path) => read_json(path)?,
                None => LabelOptions::default(),
            };
            if let Some(text) = text {
                opts.personalization = LabelOptions::with_personalization_text(text).personalization;
                opts.label = true;
            }

            let tree = label(&env, &opts);
            show(&cli, "Label", Some(&tree))?;
            if *fire_beacons {
                let fired = dispatch_beacons(&tree, &LoggedBeacons);
                println!("\n{} {fired}", "Beacons fired:".bold());
            }
        }
        Command::Wallet { options } => {
            let opts: WalletLabelOptions = read_json(options)?;
            show(&cli, "Wallet label", wallet_label(&env, &opts).as_ref())?;
        }
        Command::Tag {
            lang,
            country,
            multiple,
        } => {
            let opts = TagOptions {
                multiple: *multiple,
                locale: Locale {
                    lang: lang.clone(),
                    country: country.clone(),
                },
            };
            show(&cli, "Tag", tag(&env, &opts).as_ref())?;
        }
        Command::Plan { text, css } => {
            let plan = plan_personalization(text.as_deref());
            println!("{}", "=== Personalization Plan ===".cyan().bold());
            if *css {
                print!("{}", plan.to_stylesheet());
            } else {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve configuration: file, then `PAYLABEL_*` variables, then flags.
fn build_env(cli: &Cli) -> Result<RenderEnv> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_str(&read_text(path)?)
            .with_context(|| format!("failed to parse {}", path.display()))?
            .with_env_overrides(std::env::vars())?,
        None => RenderConfig::from_env()?,
    };

    if cli.backend {
        config.mode = RenderMode::Backend;
    }
    if cli.test_mode {
        config.test_mode = true;
    }

    let mut env = RenderEnv::new(config);
    if let Some(path) = &cli.content {
        let table = StaticContentTable::from_json_str(&read_text(path)?)
            .with_context(|| format!("failed to load content from {}", path.display()))?;
        env = env.with_content(Arc::new(table));
    }
    Ok(env)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    serde_json::from_str(&read_text(path)?)
        .with_context(|| format!("failed to parse options in {}", path.display()))
}

fn show(cli: &Cli, heading: &str, tree: Option<&RenderTree>) -> Result<()> {
    println!("{}", format!("=== {heading} ===").cyan().bold());

    let Some(tree) = tree else {
        println!("{}", "(nothing rendered)".dimmed());
        return Ok(());
    };

    match cli.format {
        Format::Html => println!("{}", tree.to_html()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree.snapshot(NodeId::ROOT))?),
        Format::Tree => print_tree(tree, NodeId::ROOT),
    }
    Ok(())
}
