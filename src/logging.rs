//! Tracing setup shared by the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::setting::SETTINGS;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `log.level` setting applies.
/// Calling this more than once (e.g. from tests) is harmless.
pub fn init_tracing() {
    if !SETTINGS.get_bool("log.active").unwrap_or(true) {
        return;
    }

    let level = SETTINGS
        .get_string("log.level")
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
