//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the CEC driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::vec::Vec;

use crate::driver::dispatch::{CecEvents, TransmitDone};
use crate::driver::frame::CecFrame;
use crate::hal::{HardwareGate, RegisterBus};
use crate::internal::register::{CEC_RX_CNT, CEC_RX_DATA0, IH_CEC_STAT0};

// =============================================================================
// Mock Register Bus
// =============================================================================

/// Mock CEC register block for testing without hardware
///
/// Registers read as 0 until written. Writes to the interrupt status register
/// clear the written bits, like the hardware does.
///
/// # Example
///
/// ```ignore
/// let bus = MockRegisters::new();
/// bus.load_rx(&[0x40, 0x04]);
/// bus.raise(CEC_STAT_EOM);
///
/// CecIrq::new(&bus, &state).handle();
/// assert_eq!(bus.writes_to(CEC_LOCK), [0]);
/// ```
#[derive(Debug, Default)]
pub struct MockRegisters {
    /// Register values by offset
    registers: RefCell<HashMap<u16, u8>>,
    /// Record of writes: (offset, value)
    write_log: RefCell<Vec<(u16, u8)>>,
    /// Record of read offsets
    read_log: RefCell<Vec<u16>>,
}

impl MockRegisters {
    /// Create a new mock register block
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value without logging a write
    pub fn set_register(&self, offset: u16, value: u8) {
        self.registers.borrow_mut().insert(offset, value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, offset: u16) -> Option<u8> {
        self.registers.borrow().get(&offset).copied()
    }

    /// Latch status bits as the hardware would
    pub fn raise(&self, bits: u8) {
        let current = self.get_register(IH_CEC_STAT0).unwrap_or(0);
        self.set_register(IH_CEC_STAT0, current | bits);
    }

    /// Place a received frame in the receive registers
    pub fn load_rx(&self, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.set_register(CEC_RX_DATA0 + i as u16, *byte);
        }
        self.set_register(CEC_RX_CNT, bytes.len() as u8);
    }

    /// All writes in order
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.write_log.borrow().clone()
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, offset: u16) -> Vec<u8> {
        self.write_log
            .borrow()
            .iter()
            .filter(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
            .collect()
    }

    /// All read offsets in order
    pub fn reads(&self) -> Vec<u16> {
        self.read_log.borrow().clone()
    }

    /// Clear the write and read logs
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
        self.read_log.borrow_mut().clear();
    }
}

impl RegisterBus for MockRegisters {
    fn read(&self, offset: u16) -> u8 {
        self.read_log.borrow_mut().push(offset);
        self.get_register(offset).unwrap_or(0)
    }

    fn write(&self, offset: u16, value: u8) {
        self.write_log.borrow_mut().push((offset, value));

        if offset == IH_CEC_STAT0 {
            // Write-1-to-clear
            let current = self.get_register(offset).unwrap_or(0);
            self.set_register(offset, current & !value);
        } else {
            self.set_register(offset, value);
        }
    }
}

// =============================================================================
// Mock Hardware Gate
// =============================================================================

/// Hardware gate that counts calls
#[derive(Debug, Default)]
pub struct MockGate {
    enables: usize,
    disables: usize,
}

impl MockGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enables(&self) -> usize {
        self.enables
    }

    pub fn disables(&self) -> usize {
        self.disables
    }
}

impl HardwareGate for MockGate {
    fn enable(&mut self) {
        self.enables += 1;
    }

    fn disable(&mut self) {
        self.disables += 1;
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Error returned by a failing [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin that records its level
#[derive(Debug, Default)]
pub struct MockPin {
    level: Cell<Option<bool>>,
    failing: bool,
}

impl MockPin {
    /// Pin that has never been driven
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every operation fails
    pub fn failing() -> Self {
        Self {
            level: Cell::new(None),
            failing: true,
        }
    }

    /// Last driven level (`None` if never driven)
    pub fn level(&self) -> Option<bool> {
        self.level.get()
    }

    fn drive(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.failing {
            return Err(MockPinError);
        }
        self.level.set(Some(high));
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Recording Event Sink
// =============================================================================

/// Event sink that records every delivery
#[derive(Debug, Default)]
pub struct RecordingEvents {
    completions: Vec<TransmitDone>,
    frames: Vec<CecFrame>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transmit completions in delivery order
    pub fn completions(&self) -> &[TransmitDone] {
        &self.completions
    }

    /// Received frames in delivery order
    pub fn frames(&self) -> &[CecFrame] {
        &self.frames
    }
}

impl CecEvents for RecordingEvents {
    fn transmit_done(&mut self, done: TransmitDone) {
        self.completions.push(done);
    }

    fn received(&mut self, frame: &CecFrame) {
        self.frames.push(*frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::register::CEC_CTRL;

    #[test]
    fn status_register_is_write_one_to_clear() {
        let bus = MockRegisters::new();
        bus.raise(0x13);

        bus.write(IH_CEC_STAT0, 0x01);
        assert_eq!(bus.read(IH_CEC_STAT0), 0x12);

        bus.write(CEC_CTRL, 0x03);
        assert_eq!(bus.read(CEC_CTRL), 0x03);
    }

    #[test]
    fn load_rx_sets_count() {
        let bus = MockRegisters::new();
        bus.load_rx(&[1, 2, 3]);

        assert_eq!(bus.get_register(CEC_RX_CNT), Some(3));
        assert_eq!(bus.get_register(CEC_RX_DATA0 + 2), Some(3));
        assert!(bus.writes().is_empty());
    }
}
