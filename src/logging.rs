//! logging
//!
//! Installs the `tracing` subscriber.
//!
//! `RUST_LOG` wins when set. Otherwise only warnings are shown, and this
//! crate's debug events (including HTTP tracing) are enabled once the debug
//! level is at least 1. Everything goes to stderr so command output on
//! stdout stays clean.
//!
//! The subscriber is installed before the context is resolved, using the
//! `--debug` flag, so that config loading and resolution are logged. The
//! level is adjusted once the profile's stored debug level is known.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Filter directives for a debug level.
pub fn directives(debug_level: u8) -> &'static str {
    if debug_level == 0 {
        "warn"
    } else {
        "warn,up_cli=debug"
    }
}

/// Adjusts the installed filter.
#[derive(Debug, Clone)]
pub struct LogHandle {
    /// `None` when `RUST_LOG` controls filtering
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogHandle {
    /// Switch to the filter for `debug_level`.
    pub fn set_level(&self, debug_level: u8) {
        if let Some(handle) = &self.reload {
            let _ = handle.modify(|filter| *filter = EnvFilter::new(directives(debug_level)));
        }
    }
}

/// Install the global subscriber. Later calls do not replace it.
pub fn init(debug_level: u8) -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(directives(debug_level)), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    LogHandle {
        reload: (!from_env).then_some(handle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_level_enables_crate_events() {
        assert_eq!(directives(0), "warn");
        assert_eq!(directives(1), "warn,up_cli=debug");
        assert_eq!(directives(3), "warn,up_cli=debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        let first = init(0);
        first.set_level(2);
        init(2).set_level(0);
    }
}
