/// Logging setup
///
/// Everything logs through `tracing`. The filter comes from `RUST_LOG` and
/// falls back to `pawadopt=info` so dependency chatter stays quiet by default.
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "pawadopt=info";

/// Build the filter the subscriber will use
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("still logging");
    }
}
