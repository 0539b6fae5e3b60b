//! Completion dispatch for the DesignWare HDMI CEC controller.
//!
//! The dispatcher runs in a deferred context after the status handler returns
//! [`IrqReturn::WakeThread`](super::interrupt::IrqReturn::WakeThread). It
//! drains the handoff flags in [`ControllerState`] and forwards each event to
//! a [`CecEvents`] sink. A transmit completion and a received frame raised by
//! the same interrupt are both delivered by one call, transmit first.

use super::frame::CecFrame;
use super::state::{ControllerState, TransmitStatus};

/// Transmit completion reported to the adapter framework.
///
/// The controller folds arbitration loss and low-drive errors into the retry
/// path, so the per-cause counters are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmitDone {
    /// Final outcome
    pub status: TransmitStatus,
    /// Arbitration losses
    pub arb_lost_count: u8,
    /// Low-drive conditions
    pub low_drive_count: u8,
    /// Other errors
    pub error_count: u8,
}

impl TransmitDone {
    /// Completion with zeroed counters
    pub const fn new(status: TransmitStatus) -> Self {
        Self {
            status,
            arb_lost_count: 0,
            low_drive_count: 0,
            error_count: 0,
        }
    }
}

/// Event sink implemented by the adapter framework.
///
/// Called from the deferred context only, so implementations may block.
pub trait CecEvents {
    /// A transmit finished
    fn transmit_done(&mut self, done: TransmitDone);

    /// A frame was received
    fn received(&mut self, frame: &CecFrame);
}

impl<E: CecEvents + ?Sized> CecEvents for &mut E {
    fn transmit_done(&mut self, done: TransmitDone) {
        (**self).transmit_done(done);
    }

    fn received(&mut self, frame: &CecFrame) {
        (**self).received(frame);
    }
}

/// What a dispatcher run delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatched {
    /// A transmit completion was delivered
    pub transmit: bool,
    /// A received frame was delivered
    pub receive: bool,
}

impl Dispatched {
    /// Whether anything was delivered
    pub const fn any(&self) -> bool {
        self.transmit || self.receive
    }
}

impl ControllerState {
    /// Deliver pending completions to `events`.
    ///
    /// Must be called from a single consumer context.
    pub fn dispatch<E: CecEvents + ?Sized>(&self, events: &mut E) -> Dispatched {
        let mut out = Dispatched::default();

        if let Some(status) = self.take_transmit() {
            events.transmit_done(TransmitDone::new(status));
            out.transmit = true;
        }

        if let Some(frame) = self.take_frame() {
            events.received(&frame);
            out.receive = true;
        }

        out
    }
}
