//! Watchdog daemon entry point.
//!
//! Startup order matters: configuration problems (bad YAML, unknown
//! channel kinds, missing channel params, empty channel set) are fatal
//! before any monitoring begins. After that point nothing terminates
//! the process; probe and delivery failures degrade into alerts or
//! log lines.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watchdog::config::load_config;
use watchdog::notify::{build_channels, DebounceEngine, Notifier};
use watchdog::probe::{worker, Prober};
use watchdog::store::FileCounterStore;

#[derive(Parser)]
#[command(name = "watchdog")]
#[command(about = "HTTP endpoint monitor with debounced notifications", long_about = None)]
struct Cli {
    /// Path to the YAML application config.
    #[arg(long, default_value = "./config.yml")]
    config_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchdog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(&cli.config_path).map_err(|e| {
        tracing::error!(path = %cli.config_path.display(), error = %e, "can't load app config");
        e
    })?;

    tracing::info!(
        entities = config.entities.len(),
        notifiers = config.notifiers.len(),
        "Configuration loaded"
    );

    let store = match &config.storage_root {
        Some(root) => FileCounterStore::new(root),
        None => FileCounterStore::beside_executable()?,
    };

    let channels = build_channels(&config.notifiers)?;
    let notifier = Notifier::new(channels, DebounceEngine::new(Box::new(store)));
    notifier.validate()?;

    let notifier = Arc::new(notifier);
    let prober = Prober::new()?;

    for entity in config.entities {
        tokio::spawn(worker::monitor(
            entity,
            Arc::clone(&notifier),
            prober.clone(),
        ));
    }

    // Workers run for the life of the process; nothing ever wakes this.
    std::future::pending::<()>().await;
    Ok(())
}
