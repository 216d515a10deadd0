//! Diagnostic logging to stderr.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `chatmark=debug`.
pub const LOG_ENV: &str = "CHATMARK_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `-v` wins over `CHATMARK_LOG`; a second
/// call is a no-op.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
