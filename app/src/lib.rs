//! Harbor application library
//!
//! Hosts the per-flow form stores and the command functions a UI shell calls.

pub mod commands;
pub mod flows;

use harbor_core::AppConfig;
use tracing_subscriber::EnvFilter;

pub use flows::{FlowError, FlowId, FlowRegistry};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Calling this more than once
/// leaves the first subscriber in place.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
    {
        tracing::info!("Starting Harbor");
    }
}
