//! Log initialisation for the `identsplit` binary.

use std::io;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Default level for a `-v` count; `RUST_LOG` takes precedence when set.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr `fmt` subscriber. Calling it twice is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbosity)).into())
        .from_env_lossy();

    let _ = fmt()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(7), Level::TRACE);
    }
}
