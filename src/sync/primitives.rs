//! Synchronization primitives for ISR-safe access.
//!
//! Low-level primitives used by [`SharedCec`](super::SharedCec) and the async
//! dispatcher.

use core::cell::RefCell;
#[cfg(feature = "async")]
use core::task::Waker;
use critical_section::Mutex;

/// Cell providing interior mutability with critical section protection.
///
/// Combines `critical_section::Mutex` with `RefCell` so the command half of
/// the controller can live in a `static` and be reached from thread and
/// interrupt context alike.
pub struct CriticalSectionCell<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionCell<T> {
    /// Create a new cell (const, suitable for static initialization).
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Execute a closure with exclusive mutable access.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Like [`with`](Self::with), but `None` if the cell is already borrowed
    /// (re-entered from an interrupt).
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            let mut value = self.inner.borrow(cs).try_borrow_mut().ok()?;
            Some(f(&mut value))
        })
    }

    /// Swap in a new value, returning the old one.
    pub fn replace(&self, value: T) -> T {
        critical_section::with(|cs| self.inner.borrow(cs).replace(value))
    }
}

// SAFETY: every access happens inside a critical section, and values only
// cross contexts when `T: Send`.
unsafe impl<T: Send> Sync for CriticalSectionCell<T> {}

/// Interrupt-safe waker slot.
///
/// The deferred task registers from `poll`; the interrupt handler wakes it
/// when the status handler has published work.
#[cfg(feature = "async")]
pub struct AtomicWaker {
    waker: CriticalSectionCell<Option<Waker>>,
}

#[cfg(feature = "async")]
impl AtomicWaker {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            waker: CriticalSectionCell::new(None),
        }
    }

    /// Store `waker`, replacing any different one.
    pub fn register(&self, waker: &Waker) {
        self.waker.with(|slot| match slot {
            Some(existing) if existing.will_wake(waker) => {}
            _ => *slot = Some(waker.clone()),
        });
    }

    /// Wake and clear the stored waker, if any.
    #[inline]
    pub fn wake(&self) {
        if let Some(w) = self.waker.with(Option::take) {
            w.wake();
        }
    }

    /// Whether a waker is stored
    pub fn is_registered(&self) -> bool {
        self.waker.with(|slot| slot.is_some())
    }
}

#[cfg(feature = "async")]
impl Default for AtomicWaker {
    fn default() -> Self {
        Self::new()
    }
}
