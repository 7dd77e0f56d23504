//! Runs the tour and prints every step.

use tour::TourConfig;
use tour::steps::run_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,functour=debug,tour=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Several steps capture panics as values; keep their reports out of the
    // narrative.
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic captured");
    }));

    let config = match TourConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            TourConfig::default()
        }
    };
    tracing::info!(?config, "starting the tour");

    run_all(&config, |title, lines| {
        println!("--- {title} ---");
        for line in lines {
            println!("{line}");
        }
    });
}
