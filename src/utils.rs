//! Diagnostics bootstrap for binaries, benches and tests

use color_eyre::eyre::eyre;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install `color-eyre` reports and a `tracing` subscriber filtered by
/// `RUST_LOG` (default `info`).
///
/// Only the first call does anything; later calls return `Ok(())`.
pub fn init_tracing() -> color_eyre::Result<()> {
    let mut result = Ok(());
    INIT.call_once(|| result = install());
    result
}

fn install() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| eyre!("failed to install tracing subscriber: {}", err))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing().unwrap();
        assert!(init_tracing().is_ok());
        tracing::info!("tracing installed");
    }
}
