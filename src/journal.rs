//! Journal (tracing) : filtre `RUST_LOG`, sinon le niveau des réglages.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Initialise le journal une seule fois (natif).
pub fn init(niveau: &str) -> Result<(), TryInitError> {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

    tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
