use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all tool controls
static NEXT_CONTROL_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_CONTROL_ID.fetch_add(1, Ordering::SeqCst)
}
