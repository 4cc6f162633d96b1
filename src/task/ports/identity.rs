//! Task identifier allocation port.

use crate::task::domain::TaskId;

/// Issues task identifiers.
///
/// Identifiers start at 1, increase strictly and are never issued twice,
/// including under concurrent callers.
#[cfg_attr(test, mockall::automock)]
pub trait TaskIdAllocator: Send + Sync {
    /// Returns the next unused identifier.
    fn next_id(&self) -> TaskId;
}
