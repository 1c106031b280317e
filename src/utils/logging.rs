use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber
///
/// `RUST_LOG` is always honoured; `verbose` adds a DEBUG directive, otherwise
/// WARN is the floor.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
