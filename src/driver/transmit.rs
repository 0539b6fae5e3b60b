//! Frame transmission for the DesignWare HDMI CEC controller.
//!
//! A transmit copies the frame into the transmit data registers, writes the
//! length and sets the start bit. It returns at once; the outcome arrives
//! through the status handler and the completion dispatcher.

use super::cec::Cec;
use super::error::{FrameError, IoError, Result};
use super::frame::CecFrame;
use crate::hal::{HardwareGate, RegisterBus};
use crate::internal::register::{CEC_CTRL_NORMAL, CEC_CTRL_START};

impl<B: RegisterBus + ?Sized, G: HardwareGate> Cec<'_, B, G> {
    /// Start transmitting `frame`.
    ///
    /// `attempts` is the number of times the status handler restarts the
    /// transmit after an initiator error before giving up with
    /// [`TransmitStatus::MaxRetries`](super::state::TransmitStatus::MaxRetries).
    /// The signal free time is accepted for the framework's call contract and
    /// left to the hardware's default timing.
    ///
    /// Only one transmit may be in flight; the caller waits for its
    /// completion before starting the next one.
    ///
    /// # Errors
    /// [`IoError::NotEnabled`] if the controller is disabled, or
    /// [`FrameError::Empty`] if `frame` has no header byte. No register is
    /// touched in either case.
    pub fn transmit(
        &mut self,
        attempts: u8,
        _signal_free_time: u32,
        frame: &CecFrame,
    ) -> Result<()> {
        if !self.is_enabled() {
            return Err(IoError::NotEnabled.into());
        }
        if frame.is_empty() {
            return Err(FrameError::Empty.into());
        }

        self.state.begin_transmit(attempts);

        let bytes = frame.as_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            self.regs.set_tx_data(i, *byte);
        }
        self.regs.set_tx_cnt(bytes.len() as u8);
        self.regs.set_ctrl(CEC_CTRL_NORMAL | CEC_CTRL_START);

        #[cfg(feature = "defmt")]
        defmt::trace!("cec: transmit {} ({} attempts)", frame, attempts);

        Ok(())
    }
}
