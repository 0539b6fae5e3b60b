//! Controller state shared by the interrupt and deferred contexts.
//!
//! The status handler (hard interrupt) is the only producer and the completion
//! dispatcher (deferred task/thread) is the only consumer. Each direction of
//! the handoff is a plain flag:
//!
//! - `tx_done`: `tx_status` holds a terminal transmit outcome
//! - `rx_done`: `rx_buf`/`rx_len` hold a complete received frame
//!
//! The producer stores the payload with `Relaxed` ordering, issues a release
//! fence and then sets the flag. The consumer clears the flag, issues an
//! acquire fence and then reads the payload. Flags are cleared with a plain
//! store so no compare-and-swap is needed.
//!
//! Nothing here is locked. Callers guarantee one producer and one consumer per
//! controller and at most one transmit in flight.

use core::sync::atomic::{AtomicBool, AtomicI16, AtomicU8, Ordering, fence};

use super::frame::CecFrame;
use crate::internal::constants::MAX_FRAME_LEN;

// =============================================================================
// Transmit Status
// =============================================================================

/// Outcome of a transmit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TransmitStatus {
    /// Transmission started, no outcome yet
    #[default]
    Pending = 0,
    /// Frame sent and acknowledged
    Ok = 1,
    /// Frame not acknowledged by the follower
    Nack = 2,
    /// Initiator errors exhausted the retry budget
    MaxRetries = 3,
}

impl TransmitStatus {
    /// Decode the stored representation
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => TransmitStatus::Ok,
            2 => TransmitStatus::Nack,
            3 => TransmitStatus::MaxRetries,
            _ => TransmitStatus::Pending,
        }
    }

    /// Whether this is a terminal outcome
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TransmitStatus::Pending)
    }
}

// =============================================================================
// Controller State
// =============================================================================

/// Transmit/receive state shared between the status handler and the
/// completion dispatcher.
///
/// `const`-constructible so it can live in a `static`:
///
/// ```ignore
/// static CEC_STATE: ControllerState = ControllerState::new();
/// ```
pub struct ControllerState {
    retries: AtomicI16,
    tx_status: AtomicU8,
    tx_done: AtomicBool,
    rx_done: AtomicBool,
    rx_len: AtomicU8,
    rx_buf: [AtomicU8; MAX_FRAME_LEN],
}

impl ControllerState {
    /// Create an idle state
    pub const fn new() -> Self {
        Self {
            retries: AtomicI16::new(0),
            tx_status: AtomicU8::new(TransmitStatus::Pending as u8),
            tx_done: AtomicBool::new(false),
            rx_done: AtomicBool::new(false),
            rx_len: AtomicU8::new(0),
            rx_buf: [const { AtomicU8::new(0) }; MAX_FRAME_LEN],
        }
    }

    /// Return to the idle state (used when the controller is enabled).
    pub(crate) fn reset(&self) {
        self.tx_done.store(false, Ordering::Relaxed);
        self.rx_done.store(false, Ordering::Relaxed);
        self.retries.store(0, Ordering::Relaxed);
        self.tx_status
            .store(TransmitStatus::Pending as u8, Ordering::Relaxed);
        self.rx_len.store(0, Ordering::Relaxed);
        fence(Ordering::Release);
    }

    // =========================================================================
    // Transmit side
    // =========================================================================

    /// Arm a new transmit with `attempts` arbitration retries.
    pub(crate) fn begin_transmit(&self, attempts: u8) {
        self.retries.store(attempts as i16, Ordering::Relaxed);
        self.tx_status
            .store(TransmitStatus::Pending as u8, Ordering::Relaxed);
    }

    /// Consume one retry. Returns `false` when the budget is exhausted.
    pub(crate) fn take_retry(&self) -> bool {
        let remaining = self.retries.load(Ordering::Relaxed);
        if remaining > 0 {
            self.retries.store(remaining - 1, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Publish a terminal transmit outcome.
    pub(crate) fn complete_transmit(&self, status: TransmitStatus) {
        self.tx_status.store(status as u8, Ordering::Relaxed);
        fence(Ordering::Release);
        self.tx_done.store(true, Ordering::Relaxed);
    }

    /// Retries left for the transmit in flight
    pub fn retries_remaining(&self) -> i16 {
        self.retries.load(Ordering::Relaxed)
    }

    /// Last transmit status written by the status handler
    pub fn transmit_status(&self) -> TransmitStatus {
        TransmitStatus::from_raw(self.tx_status.load(Ordering::Relaxed))
    }

    /// Take a pending transmit outcome, clearing `tx_done`.
    pub(crate) fn take_transmit(&self) -> Option<TransmitStatus> {
        if !self.tx_done.load(Ordering::Relaxed) {
            return None;
        }
        self.tx_done.store(false, Ordering::Relaxed);
        fence(Ordering::Acquire);
        Some(self.transmit_status())
    }

    // =========================================================================
    // Receive side
    // =========================================================================

    /// Publish a received frame. `bytes` must already be clamped.
    pub(crate) fn publish_frame(&self, bytes: &[u8]) {
        let len = bytes.len().min(MAX_FRAME_LEN);
        for (slot, byte) in self.rx_buf.iter().zip(&bytes[..len]) {
            slot.store(*byte, Ordering::Relaxed);
        }
        self.rx_len.store(len as u8, Ordering::Relaxed);
        fence(Ordering::Release);
        self.rx_done.store(true, Ordering::Relaxed);
    }

    /// Take a pending received frame, clearing `rx_done`.
    pub(crate) fn take_frame(&self) -> Option<CecFrame> {
        if !self.rx_done.load(Ordering::Relaxed) {
            return None;
        }
        self.rx_done.store(false, Ordering::Relaxed);
        fence(Ordering::Acquire);

        let len = (self.rx_len.load(Ordering::Relaxed) as usize).min(MAX_FRAME_LEN);
        let mut bytes = [0u8; MAX_FRAME_LEN];
        for (byte, slot) in bytes.iter_mut().zip(&self.rx_buf[..len]) {
            *byte = slot.load(Ordering::Relaxed);
        }
        Some(CecFrame::truncated(&bytes[..len]))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// A transmit completion is waiting for the dispatcher
    pub fn tx_pending(&self) -> bool {
        self.tx_done.load(Ordering::Acquire)
    }

    /// A received frame is waiting for the dispatcher
    pub fn rx_pending(&self) -> bool {
        self.rx_done.load(Ordering::Acquire)
    }

    /// Any deferred work is waiting
    pub fn has_pending(&self) -> bool {
        self.tx_pending() || self.rx_pending()
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ControllerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerState")
            .field("retries", &self.retries_remaining())
            .field("tx_status", &self.transmit_status())
            .field("tx_done", &self.tx_pending())
            .field("rx_done", &self.rx_pending())
            .finish_non_exhaustive()
    }
}
