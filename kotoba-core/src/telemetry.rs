//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::GeneralConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `general.log_level` is used as the
/// filter directive. Returns `false` if a global subscriber already exists.
pub fn init_tracing(general: &GeneralConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&general.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if general.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
