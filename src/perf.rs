//! Performance instrumentation for the input hot paths.
//!
//! Sample handling and event interception run on every pointer move, so
//! they carry optional timing instrumentation. Enable it with the
//! `profiling` cargo feature:
//!
//! ```toml
//! [dependencies]
//! dragdeck = { features = ["profiling"] }
//! ```
//!
//! Without the feature the macros compile to nothing.

use crate::constants::SLOW_SCOPE_WARN_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
///
/// # Example
/// ```ignore
/// use dragdeck::profile_scope;
///
/// fn handle_input() {
///     profile_scope!("handle_input");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// A scoped timer that logs its duration on drop.
///
/// Scopes faster than the threshold log at trace level; slower ones warn.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer with the default warning threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_WARN_MS)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = format!("{:.2}", elapsed_ms), "scope");
        }
    }
}
