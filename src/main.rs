use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::sync::mpsc;

use tripview::app::{App, AppEvent};
use tripview::config::Config;
use tripview::content::probe::{run_probes, PROBE_GAP, PROBE_TIMEOUT};
use tripview::content::ContentClient;
use tripview::keybindings::KeybindingRegistry;
use tripview::locale::Language;
use tripview::theme::ThemeVariant;
use tripview::ui;

/// Get the config directory path (~/.config/tripview/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("tripview"))
}

#[derive(Parser, Debug)]
#[command(
    name = "tripview",
    version,
    about = "Terminal viewer for a bilingual travel package page"
)]
struct Args {
    /// Content service base URL (overrides config)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Package to show (overrides config)
    #[arg(long, value_name = "ID")]
    package: Option<String>,

    /// Page language: es or en (overrides config)
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Config file path [default: ~/.config/tripview/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check each content endpoint once and report its status
    Probe,
}

/// The TUI owns stdout, so logs go to stderr, and only when RUST_LOG is set,
/// or to `--log-file`.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if std::env::var_os("RUST_LOG").is_some() => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Config file with CLI overrides applied.
fn resolve_config(args: &Args) -> Result<Config> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&path)
        .with_context(|| format!("Failed to load config from '{}'", path.display()))?;

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(package) = &args.package {
        config.package_id = package.clone();
    }
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    Ok(config)
}

async fn probe(client: &ContentClient, package_id: &str) -> Result<()> {
    println!("Probing {} (package {})", client.base_url(), package_id);
    let results = run_probes(client, package_id, PROBE_TIMEOUT, PROBE_GAP).await;
    let failed = results.iter().filter(|r| !r.outcome.is_success()).count();
    for result in &results {
        println!("{}", result);
    }
    println!();
    println!("{}/{} endpoints OK", results.len() - failed, results.len());
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let config = resolve_config(&args)?;
    let base_url = config
        .validated_base_url()
        .context("Invalid content service URL")?;
    let language: Language = config.page_language()?;
    let client = ContentClient::new(&base_url, config.retry_policy())
        .context("Failed to build HTTP client")?;

    if let Some(Command::Probe) = args.command {
        return probe(&client, &config.package_id).await;
    }

    let theme = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
        ThemeVariant::default()
    });

    let mut keybindings = KeybindingRegistry::new();
    for warning in keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let mut app = App::new(language, &config.package_id, theme, keybindings)
        .context("Failed to create application")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);
    tracing::info!(
        base_url = %base_url,
        package = %config.package_id,
        language = %language,
        "Fetching page content"
    );
    let fetch = ui::spawn_content_fetch(client, config.package_id.clone(), language, event_tx);

    let result = ui::run(&mut app, event_rx).await;
    fetch.abort();
    result
}
