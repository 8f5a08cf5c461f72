use roster_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

// Logs go to stderr so they never interleave with the rendered view.
fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("roster_player", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::warn!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::Builder::from_default_env()
            .target(Target::Stderr)
            .init();
        log::info!("Initialized logger from env");
    }

    let config = AppConfig::from_environment();
    log::info!("Using catalog at {}", config.api_url());

    app::run(config).await
}
