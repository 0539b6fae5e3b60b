//! Register definitions for the DesignWare HDMI CEC block
//!
//! Offsets are byte offsets inside the HDMI transmitter's register space. The
//! bus implementation decides how an offset maps onto memory (see
//! [`RegisterBus`](crate::hal::RegisterBus)).
//!
//! # Register Map
//!
//! | Register | Offset | Notes |
//! |----------|--------|-------|
//! | IH_CEC_STAT0 | 0x0106 | interrupt status, write-1-to-clear |
//! | IH_MUTE_CEC_STAT0 | 0x0186 | interrupt mute |
//! | CEC_CTRL | 0x7D00 | start / normal mode |
//! | CEC_STAT | 0x7D01 | event bits |
//! | CEC_MASK | 0x7D02 | 1 = masked |
//! | CEC_POLARITY | 0x7D03 | |
//! | CEC_INT | 0x7D04 | |
//! | CEC_ADDR_L/H | 0x7D05/0x7D06 | claimed address bitmap |
//! | CEC_TX_CNT | 0x7D07 | |
//! | CEC_RX_CNT | 0x7D08 | |
//! | CEC_TX_DATA0.. | 0x7D10 | 16 bytes |
//! | CEC_RX_DATA0.. | 0x7D20 | 16 bytes |
//! | CEC_LOCK | 0x7D30 | write 0 to re-arm reception |
//! | CEC_WKUPCTRL | 0x7D31 | |

use crate::hal::RegisterBus;
use crate::internal::constants::DATA_REGISTER_COUNT;

// =============================================================================
// Interrupt Handler Registers
// =============================================================================

/// CEC interrupt status (write-1-to-clear)
pub const IH_CEC_STAT0: u16 = 0x0106;

/// CEC interrupt mute
pub const IH_MUTE_CEC_STAT0: u16 = 0x0186;

// =============================================================================
// CEC Engine Registers
// =============================================================================

/// Control register
pub const CEC_CTRL: u16 = 0x7D00;
/// Status register
pub const CEC_STAT: u16 = 0x7D01;
/// Interrupt mask register
pub const CEC_MASK: u16 = 0x7D02;
/// Interrupt polarity register
pub const CEC_POLARITY: u16 = 0x7D03;
/// Interrupt enable register
pub const CEC_INT: u16 = 0x7D04;
/// Address filter, low byte
pub const CEC_ADDR_L: u16 = 0x7D05;
/// Address filter, high byte
pub const CEC_ADDR_H: u16 = 0x7D06;
/// Transmit byte count
pub const CEC_TX_CNT: u16 = 0x7D07;
/// Receive byte count
pub const CEC_RX_CNT: u16 = 0x7D08;
/// First transmit data register
pub const CEC_TX_DATA0: u16 = 0x7D10;
/// First receive data register
pub const CEC_RX_DATA0: u16 = 0x7D20;
/// Receive buffer lock
pub const CEC_LOCK: u16 = 0x7D30;
/// Wakeup control
pub const CEC_WKUPCTRL: u16 = 0x7D31;

// =============================================================================
// CEC_CTRL bits
// =============================================================================

/// Start transmission of the loaded frame
pub const CEC_CTRL_START: u8 = 1 << 0;
/// Normal (non-retransmit) frame type
pub const CEC_CTRL_NORMAL: u8 = 1 << 1;

// =============================================================================
// Status bits (CEC_STAT and IH_CEC_STAT0 share the layout)
// =============================================================================

/// Transmission completed and acknowledged
pub const CEC_STAT_DONE: u8 = 1 << 0;
/// A complete frame has been received
pub const CEC_STAT_EOM: u8 = 1 << 1;
/// Transmission not acknowledged
pub const CEC_STAT_NACK: u8 = 1 << 2;
/// Arbitration lost
pub const CEC_STAT_ARBLOST: u8 = 1 << 3;
/// Initiator error (line busy / collision at start)
pub const CEC_STAT_ERROR_INIT: u8 = 1 << 4;
/// Follower error
pub const CEC_STAT_ERROR_FOLL: u8 = 1 << 5;
/// Wakeup event
pub const CEC_STAT_WAKEUP: u8 = 1 << 6;

/// Events the driver unmasks while enabled
pub const CEC_ENABLED_IRQS: u8 =
    CEC_STAT_ERROR_INIT | CEC_STAT_NACK | CEC_STAT_EOM | CEC_STAT_DONE;

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate read/write accessor methods for a byte register.
macro_rules! reg_rw {
    ($read_fn:ident, $write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u8 {
            self.bus.read($offset)
        }

        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(&self, value: u8) {
            self.bus.write($offset, value);
        }
    };
}

/// Generate a write-only accessor method for a byte register.
macro_rules! reg_wo {
    ($write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(&self, value: u8) {
            self.bus.write($offset, value);
        }
    };
}

/// Generate a read-only accessor method for a byte register.
macro_rules! reg_ro {
    ($read_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u8 {
            self.bus.read($offset)
        }
    };
}

// =============================================================================
// Typed Accessors
// =============================================================================

/// Named accessors for the CEC register block on top of a [`RegisterBus`].
///
/// All accesses are single bytes and carry no ordering beyond what the bus
/// provides.
pub struct CecRegs<'a, B: RegisterBus + ?Sized> {
    bus: &'a B,
}

impl<B: RegisterBus + ?Sized> Clone for CecRegs<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: RegisterBus + ?Sized> Copy for CecRegs<'_, B> {}

impl<'a, B: RegisterBus + ?Sized> CecRegs<'a, B> {
    /// Wrap a register bus
    #[inline(always)]
    pub const fn new(bus: &'a B) -> Self {
        Self { bus }
    }

    /// Underlying bus
    #[inline(always)]
    pub fn bus(&self) -> &'a B {
        self.bus
    }

    reg_rw!(ih_stat, set_ih_stat, IH_CEC_STAT0, "interrupt status (write-1-to-clear)");
    reg_wo!(set_ih_mute, IH_MUTE_CEC_STAT0, "interrupt mute");
    reg_rw!(ctrl, set_ctrl, CEC_CTRL, "control register");
    reg_ro!(stat, CEC_STAT, "status register");
    reg_rw!(mask, set_mask, CEC_MASK, "interrupt mask");
    reg_rw!(polarity, set_polarity, CEC_POLARITY, "interrupt polarity");
    reg_wo!(set_addr_l, CEC_ADDR_L, "address filter low byte");
    reg_wo!(set_addr_h, CEC_ADDR_H, "address filter high byte");
    reg_wo!(set_tx_cnt, CEC_TX_CNT, "transmit byte count");
    reg_ro!(rx_cnt, CEC_RX_CNT, "receive byte count");
    reg_wo!(set_lock, CEC_LOCK, "receive buffer lock");

    /// Write transmit data register `index`
    #[inline(always)]
    pub fn set_tx_data(&self, index: usize, value: u8) {
        debug_assert!(index < DATA_REGISTER_COUNT);
        self.bus.write(CEC_TX_DATA0 + index as u16, value);
    }

    /// Read receive data register `index`
    #[inline(always)]
    pub fn rx_data(&self, index: usize) -> u8 {
        debug_assert!(index < DATA_REGISTER_COUNT);
        self.bus.read(CEC_RX_DATA0 + index as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockRegisters;

    #[test]
    fn enabled_irqs_cover_exactly_four_events() {
        assert_eq!(CEC_ENABLED_IRQS.count_ones(), 4);
        assert_eq!(CEC_ENABLED_IRQS & CEC_STAT_ARBLOST, 0);
        assert_eq!(CEC_ENABLED_IRQS & CEC_STAT_ERROR_FOLL, 0);
        assert_eq!(CEC_ENABLED_IRQS & CEC_STAT_WAKEUP, 0);
    }

    #[test]
    fn data_registers_are_consecutive() {
        let bus = MockRegisters::new();
        let regs = CecRegs::new(&bus);

        regs.set_tx_data(0, 0x10);
        regs.set_tx_data(15, 0xAB);

        assert_eq!(bus.get_register(CEC_TX_DATA0), Some(0x10));
        assert_eq!(bus.get_register(0x7D1F), Some(0xAB));
    }

    #[test]
    fn rx_data_reads_from_rx_block() {
        let bus = MockRegisters::new();
        bus.set_register(CEC_RX_DATA0 + 3, 0x44);

        assert_eq!(CecRegs::new(&bus).rx_data(3), 0x44);
    }
}
