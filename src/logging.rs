//! Diagnostic logging on stderr.
//!
//! Level priority: `RUST_LOG` > `--debug` > configured level > `warn`.
//! Console status lines and the summary go to stdout and are not logging.

use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialise the tracing subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let initialised = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if initialised {
        tracing::debug!(
            app = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "Logging initialised"
        );
    }
}
