use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of append timestamps, in whole seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> u32;
}

/// Wall-clock seconds since the Unix epoch.
///
/// The native 64-bit value is truncated to its low 32 bits. This wraps in
/// 2106 and is accepted rather than reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> u32 {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        secs as u32
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU32,
}

impl ManualClock {
    pub fn new(secs: u32) -> Self {
        Self {
            secs: AtomicU32::new(secs),
        }
    }

    pub fn set(&self, secs: u32) {
        self.secs.store(secs, Ordering::Release);
    }

    /// Moves the clock forward, wrapping at `u32::MAX`.
    pub fn advance(&self, secs: u32) {
        self.secs
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                Some(now.wrapping_add(secs))
            })
            .ok();
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> u32 {
        self.secs.load(Ordering::Acquire)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    #[inline]
    fn now(&self) -> u32 {
        (**self).now()
    }
}
