//! Deletion results.

/// A media item a bulk deletion could not fully remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub media_item_id: i32,
    pub message: String,
}

/// Outcome of deleting several media items in one call.
///
/// An item whose teardown was incomplete is already gone locally but still
/// counts as a failure here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeletionReport {
    pub total: usize,
    pub deleted: usize,
    pub failures: Vec<ItemFailure>,
}

impl BulkDeletionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
