//! Atomic counter issuing task identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::task::{domain::TaskId, ports::TaskIdAllocator};

/// Lock-free allocator handing out `1, 2, 3, ...` for the process lifetime.
#[derive(Debug, Default)]
pub struct SequentialTaskIdAllocator {
    last_issued: AtomicU64,
}

impl SequentialTaskIdAllocator {
    /// Creates an allocator whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_issued: AtomicU64::new(0),
        }
    }
}

impl TaskIdAllocator for SequentialTaskIdAllocator {
    fn next_id(&self) -> TaskId {
        // fetch_add is a single read-modify-write, so no two callers see the
        // same previous value.
        let previous = self.last_issued.fetch_add(1, Ordering::Relaxed);
        TaskId::new(previous.saturating_add(1))
    }
}
