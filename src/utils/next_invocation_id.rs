use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide invocation counter, initialized at 1. Wraps at `u32::MAX`
/// which is acceptable for a correlation id.
static INVOCATION_COUNTER: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(1));

/// Returns the correlation id for the next bound command.
#[inline]
pub fn next_invocation_id() -> u32 {
    INVOCATION_COUNTER.fetch_add(1, Ordering::Relaxed) as u32
}
