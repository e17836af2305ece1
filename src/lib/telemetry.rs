//! Diagnostics sink handed to every component instead of a process-wide logger.

use tracing::Dispatch;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `--verbose` is set and `RUST_LOG` is not.
const VERBOSE_DEFAULT_FILTER: &str = "debug";

/// Explicit logging configuration for one invocation.
///
/// When verbosity is off the wrapped dispatch is [`Dispatch::none`], so events
/// emitted through [`Diagnostics::scope`] are dropped without formatting.
#[derive(Clone)]
pub struct Diagnostics {
    dispatch: Dispatch,
}

impl Diagnostics {
    /// Build the sink for an invocation. Verbose output goes to stderr.
    pub fn new(verbose: bool) -> Self {
        if !verbose {
            return Self::silent();
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(VERBOSE_DEFAULT_FILTER));
        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// A sink that discards everything.
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Run `f` with this sink as the current default subscriber.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
