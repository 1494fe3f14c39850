use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Holds the "generation in progress" flag for as long as it lives.
///
/// The flag is cleared on drop, whichever way the generation ends.
#[derive(Debug)]
pub struct InProgress {
    flag: Arc<AtomicBool>,
}

impl InProgress {
    /// Returns `None` if another generation already holds the flag.
    pub fn try_begin(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InProgress {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InProgress {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
