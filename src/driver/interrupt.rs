//! Interrupt status handling for the DesignWare HDMI CEC controller.
//!
//! This module provides:
//!
//! - [`CecStatus`]: parsed view of the CEC interrupt status byte
//! - [`CecIrq`]: the latency-critical status handler run from the interrupt
//! - [`IrqReturn`]: what the handler tells the interrupt plumbing
//!
//! The handler never blocks and never allocates. It acknowledges status,
//! retries the transmit in place on an initiator error while the retry budget
//! lasts, and copies received frames out of the controller. Everything else is
//! left to the completion dispatcher (see [`dispatch`](super::dispatch)).

use super::state::{ControllerState, TransmitStatus};
use crate::hal::RegisterBus;
use crate::internal::constants::MAX_FRAME_LEN;
use crate::internal::register::{
    CEC_CTRL_START, CEC_ENABLED_IRQS, CEC_STAT_ARBLOST, CEC_STAT_DONE, CEC_STAT_EOM,
    CEC_STAT_ERROR_FOLL, CEC_STAT_ERROR_INIT, CEC_STAT_NACK, CEC_STAT_WAKEUP, CecRegs,
};

// =============================================================================
// Interrupt Status
// =============================================================================

/// Interrupt status flags parsed from the CEC interrupt status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CecStatus {
    /// Transmission done
    pub done: bool,
    /// End of message: a complete frame was received
    pub eom: bool,
    /// Transmission not acknowledged
    pub nack: bool,
    /// Arbitration lost
    pub arb_lost: bool,
    /// Initiator error
    pub init_error: bool,
    /// Follower error
    pub follower_error: bool,
    /// Wakeup
    pub wakeup: bool,
}

impl CecStatus {
    /// The events the driver unmasks while enabled
    pub const ENABLED: Self = Self::from_raw(CEC_ENABLED_IRQS);

    /// Create from raw status register value
    #[inline]
    pub const fn from_raw(status: u8) -> Self {
        Self {
            done: (status & CEC_STAT_DONE) != 0,
            eom: (status & CEC_STAT_EOM) != 0,
            nack: (status & CEC_STAT_NACK) != 0,
            arb_lost: (status & CEC_STAT_ARBLOST) != 0,
            init_error: (status & CEC_STAT_ERROR_INIT) != 0,
            follower_error: (status & CEC_STAT_ERROR_FOLL) != 0,
            wakeup: (status & CEC_STAT_WAKEUP) != 0,
        }
    }

    /// Convert to raw value for clearing (write-1-to-clear)
    #[inline]
    pub const fn to_raw(&self) -> u8 {
        let mut val = 0u8;
        if self.done {
            val |= CEC_STAT_DONE;
        }
        if self.eom {
            val |= CEC_STAT_EOM;
        }
        if self.nack {
            val |= CEC_STAT_NACK;
        }
        if self.arb_lost {
            val |= CEC_STAT_ARBLOST;
        }
        if self.init_error {
            val |= CEC_STAT_ERROR_INIT;
        }
        if self.follower_error {
            val |= CEC_STAT_ERROR_FOLL;
        }
        if self.wakeup {
            val |= CEC_STAT_WAKEUP;
        }
        val
    }

    /// Check if any event is flagged
    #[inline]
    pub const fn any(&self) -> bool {
        self.to_raw() != 0
    }

    /// Transmit outcome group, highest priority first.
    ///
    /// An initiator error wins over done, done wins over NACK.
    #[inline]
    pub const fn tx_event(&self) -> Option<TxEvent> {
        if self.init_error {
            Some(TxEvent::InitError)
        } else if self.done {
            Some(TxEvent::Done)
        } else if self.nack {
            Some(TxEvent::Nack)
        } else {
            None
        }
    }
}

/// Transmit-related event reported by one interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxEvent {
    /// Initiator (arbitration) error: retry or give up
    InitError,
    /// Frame sent
    Done,
    /// Frame not acknowledged
    Nack,
}

// =============================================================================
// Status Handler
// =============================================================================

/// Result of one status handler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqReturn {
    /// Status was zero: the interrupt belongs to another device on the line
    None,
    /// Status acknowledged, nothing to deliver
    Handled,
    /// Work is waiting for the completion dispatcher
    WakeThread,
}

/// Status handler for the CEC interrupt.
///
/// Holds only shared references, so it can be created once and called from
/// the interrupt handler while the command side keeps running.
///
/// # Example
/// ```ignore
/// static CEC_STATE: ControllerState = ControllerState::new();
/// static BUS: MmioBus = unsafe { MmioBus::new(HDMI_BASE, 0) };
///
/// #[interrupt]
/// fn HDMI() {
///     let irq = CecIrq::new(&BUS, &CEC_STATE);
///     if irq.handle() == IrqReturn::WakeThread {
///         // schedule the dispatcher
///     }
/// }
/// ```
pub struct CecIrq<'a, B: RegisterBus + ?Sized> {
    regs: CecRegs<'a, B>,
    state: &'a ControllerState,
}

impl<B: RegisterBus + ?Sized> Clone for CecIrq<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: RegisterBus + ?Sized> Copy for CecIrq<'_, B> {}

impl<'a, B: RegisterBus + ?Sized> CecIrq<'a, B> {
    /// Create a handler over `bus` publishing into `state`
    pub const fn new(bus: &'a B, state: &'a ControllerState) -> Self {
        Self {
            regs: CecRegs::new(bus),
            state,
        }
    }

    /// Shared state this handler publishes into
    pub fn state(&self) -> &'a ControllerState {
        self.state
    }

    /// Run the status handler once.
    pub fn handle(&self) -> IrqReturn {
        let raw = self.regs.ih_stat();
        if raw == 0 {
            return IrqReturn::None;
        }

        // Ack first so an event raised while we work is not lost
        self.regs.set_ih_stat(raw);

        let status = CecStatus::from_raw(raw);
        let mut ret = IrqReturn::Handled;

        match status.tx_event() {
            Some(TxEvent::InitError) => {
                if self.state.take_retry() {
                    let ctrl = self.regs.ctrl();
                    self.regs.set_ctrl(ctrl | CEC_CTRL_START);
                    #[cfg(feature = "defmt")]
                    defmt::trace!(
                        "cec: initiator error, retrying ({} left)",
                        self.state.retries_remaining()
                    );
                } else {
                    self.finish_transmit(TransmitStatus::MaxRetries);
                    ret = IrqReturn::WakeThread;
                }
            }
            Some(TxEvent::Done) => {
                self.finish_transmit(TransmitStatus::Ok);
                ret = IrqReturn::WakeThread;
            }
            Some(TxEvent::Nack) => {
                self.finish_transmit(TransmitStatus::Nack);
                ret = IrqReturn::WakeThread;
            }
            None => {}
        }

        if status.eom {
            self.receive();
            ret = IrqReturn::WakeThread;
        }

        ret
    }

    fn finish_transmit(&self, status: TransmitStatus) {
        #[cfg(feature = "defmt")]
        defmt::trace!("cec: transmit finished: {}", status);
        self.state.complete_transmit(status);
    }

    fn receive(&self) {
        let len = (self.regs.rx_cnt() as usize).min(MAX_FRAME_LEN);

        let mut bytes = [0u8; MAX_FRAME_LEN];
        for (i, byte) in bytes[..len].iter_mut().enumerate() {
            *byte = self.regs.rx_data(i);
        }

        // Release the receive buffer before publishing
        self.regs.set_lock(0);

        self.state.publish_frame(&bytes[..len]);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
