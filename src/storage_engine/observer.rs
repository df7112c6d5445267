/// Emitted once per committed append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppendEvent {
    /// Slot the record was written to.
    pub slot_index: usize,

    /// Timestamp captured for the record.
    pub timestamp: u32,
}

/// One-way append notification hook.
///
/// Observers run after the write lock has been released, on the appending
/// thread. They may read from the log but should not block for long, since
/// the caller of `append` waits for every observer to return.
pub trait AppendObserver: Send + Sync {
    fn on_append(&self, event: &AppendEvent);
}

impl<F> AppendObserver for F
where
    F: Fn(&AppendEvent) + Send + Sync,
{
    #[inline]
    fn on_append(&self, event: &AppendEvent) {
        self(event)
    }
}
