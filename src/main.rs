use anyhow::Result;
use apinexus::{config, tui};
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "apinexus")]
#[command(about = "Terminal dashboard for browsing public web APIs")]
#[command(version)]
struct Args {
    /// Initialize configuration
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,

    /// Integration to open first (e.g. agify, zip)
    #[arg(long, short)]
    select: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    if args.init {
        config::init_wizard()?;
        return Ok(());
    }

    let mut config = config::load(args.config.as_deref())?;
    if let Some(id) = args.select {
        config.ui.initial = Some(id);
    }

    tui::run(config).await
}

/// Log to a file in the cache dir; the terminal belongs to the TUI.
fn init_logging() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("apinexus=info".parse()?);

    let log_file = config::cache_dir().ok().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("apinexus.log"))
            .ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
    Ok(())
}
