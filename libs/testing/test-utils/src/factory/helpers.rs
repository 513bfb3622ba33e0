use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(1);

/// Process-wide sequence for unique default names and emails
pub fn next_id() -> u32 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
