//! ISR-safe controller wrapper using critical sections.
//!
//! [`SharedCec`] keeps the command half of the controller in a `static` so
//! both application code and interrupt handlers can issue commands.

use super::primitives::CriticalSectionCell;
use crate::driver::cec::Cec;
use crate::hal::{HardwareGate, RegisterBus};

/// Critical-section protected slot for a [`Cec`].
///
/// Starts empty; [`init`](Self::init) installs the controller once it has
/// been created.
///
/// # Example
///
/// ```ignore
/// static CEC_STATE: ControllerState = ControllerState::new();
/// static CEC: SharedCec<'static, MmioBus, NoGate> = SharedCec::new();
///
/// CEC.init(Cec::new(&BUS, &CEC_STATE, NoGate, config)?);
/// CEC.with(|cec| cec.enable(true));
/// ```
pub struct SharedCec<'a, B: RegisterBus + ?Sized, G: HardwareGate> {
    inner: CriticalSectionCell<Option<Cec<'a, B, G>>>,
}

impl<'a, B: RegisterBus + ?Sized, G: HardwareGate> SharedCec<'a, B, G> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Install `cec`, returning the controller it replaces.
    pub fn init(&self, cec: Cec<'a, B, G>) -> Option<Cec<'a, B, G>> {
        self.inner.replace(Some(cec))
    }

    /// Remove the controller.
    pub fn take(&self) -> Option<Cec<'a, B, G>> {
        self.inner.replace(None)
    }

    /// Whether a controller is installed
    pub fn is_initialized(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Interrupts are disabled for the duration of the closure. Returns
    /// `None` if no controller is installed.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Cec<'a, B, G>) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Like [`with`](Self::with), but also `None` when re-entered.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Cec<'a, B, G>) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<B: RegisterBus + ?Sized, G: HardwareGate> Default for SharedCec<'_, B, G> {
    fn default() -> Self {
        Self::new()
    }
}
