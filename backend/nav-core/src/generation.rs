//! Generation tokens for stale-response suppression.
//!
//! Each logical flow owns one [`Generation`]. Starting a request advances it
//! and captures the new token; after every await the request compares its
//! token with the counter and drops its result if a newer request exists.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for GenerationToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "#{}", self.0)
    }
}

/// Monotonic counter shared by every request of one flow.
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, making every earlier token stale.
    pub fn advance(&self) -> GenerationToken {
        GenerationToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn current(&self) -> GenerationToken {
        GenerationToken(self.counter.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.current() == token
    }
}
