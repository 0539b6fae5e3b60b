//! Logical address filtering for the DesignWare HDMI CEC controller.
//!
//! The controller only acknowledges frames addressed to logical addresses set
//! in its 16-bit filter. Bits 0-14 map to logical addresses 0-14; bit 15 marks
//! the filter as active and is set whenever any address is claimed.
//!
//! Claims accumulate: claiming address 4 and then address 8 leaves both set.
//! The only way to drop an address is to release all of them with
//! [`LogicalAddressRequest::Invalid`].

use super::cec::Cec;
use super::config::{LogicalAddress, LogicalAddressRequest};
use crate::hal::{HardwareGate, RegisterBus};
use crate::internal::constants::{ADDR_FILTER_ACTIVE, MAX_CLAIMABLE_ADDR};

// =============================================================================
// Address Mask
// =============================================================================

/// Claimed-address bitmap as mirrored into the filter registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressMask(u16);

impl AddressMask {
    /// No address claimed, filter inactive
    pub const EMPTY: Self = Self(0);

    /// Add `addr` to the set and mark the filter active
    #[must_use]
    pub const fn claim(self, addr: LogicalAddress) -> Self {
        Self(self.0 | addr.bit() | ADDR_FILTER_ACTIVE)
    }

    /// Raw 16-bit value
    #[inline(always)]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Value for the low filter register
    #[inline(always)]
    pub const fn low(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Value for the high filter register
    #[inline(always)]
    pub const fn high(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Whether `addr` is claimed
    pub const fn contains(self, addr: LogicalAddress) -> bool {
        self.0 & addr.bit() != 0
    }

    /// Whether the filter is active
    pub const fn is_active(self) -> bool {
        self.0 & ADDR_FILTER_ACTIVE != 0
    }

    /// Whether no address is claimed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Claimed addresses, lowest first
    pub fn iter(self) -> impl Iterator<Item = LogicalAddress> {
        (0..=MAX_CLAIMABLE_ADDR)
            .filter_map(|a| LogicalAddress::new(a).ok())
            .filter(move |a| self.contains(*a))
    }
}

impl From<AddressMask> for u16 {
    fn from(mask: AddressMask) -> Self {
        mask.0
    }
}

// =============================================================================
// Filter Commands
// =============================================================================

impl<B: RegisterBus + ?Sized, G: HardwareGate> Cec<'_, B, G> {
    /// Claim a logical address, or release every address.
    ///
    /// The accumulated bitmap is written low byte first, then high byte. This
    /// never fails and works in either power state.
    ///
    /// # Example
    /// ```ignore
    /// cec.set_logical_address(LogicalAddress::PLAYBACK_1.into());
    /// cec.set_logical_address(LogicalAddressRequest::Invalid);
    /// ```
    pub fn set_logical_address(&mut self, request: LogicalAddressRequest) {
        self.addresses = match request {
            LogicalAddressRequest::Invalid => AddressMask::EMPTY,
            LogicalAddressRequest::Claim(addr) => self.addresses.claim(addr),
        };

        self.regs.set_addr_l(self.addresses.low());
        self.regs.set_addr_h(self.addresses.high());

        #[cfg(feature = "defmt")]
        defmt::debug!("cec: address filter {=u16:#06x}", self.addresses.bits());
    }

    /// Currently claimed addresses
    ///
    /// Empty while the controller is disabled.
    pub fn claimed_addresses(&self) -> AddressMask {
        self.addresses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::config::CecConfig;
    use crate::driver::state::ControllerState;
    use crate::internal::register::{CEC_ADDR_H, CEC_ADDR_L};
    use crate::test_utils::{MockGate, MockRegisters};

    fn addr(a: u8) -> LogicalAddress {
        LogicalAddress::new(a).unwrap()
    }

    #[test]
    fn claim_sets_active_flag() {
        let mask = AddressMask::EMPTY.claim(LogicalAddress::TV);

        assert_eq!(mask.bits(), 0x8001);
        assert!(mask.is_active());
        assert!(mask.contains(LogicalAddress::TV));
        assert!(!mask.contains(LogicalAddress::PLAYBACK_1));
    }

    #[test]
    fn mask_splits_into_halves() {
        let mask = AddressMask::EMPTY.claim(addr(4)).claim(addr(9));

        assert_eq!(mask.low(), 0x10);
        assert_eq!(mask.high(), 0x82);
        assert_eq!(u16::from(mask), 0x8210);
    }

    #[test]
    fn iter_lists_claimed_addresses() {
        let mask = AddressMask::EMPTY.claim(addr(14)).claim(addr(1));

        let mut it = mask.iter();
        assert_eq!(it.next(), Some(addr(1)));
        assert_eq!(it.next(), Some(addr(14)));
        assert_eq!(it.next(), None);
        assert_eq!(AddressMask::EMPTY.iter().count(), 0);
    }

    #[test]
    fn claims_accumulate_in_hardware() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let mut cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();
        bus.clear_writes();

        let claimed = [0u8, 3, 4, 11, 14];
        let mut expected = 0u16;
        for a in claimed {
            cec.set_logical_address(addr(a).into());
            expected |= 1 << a;
        }
        expected |= 0x8000;

        assert_eq!(cec.claimed_addresses().bits(), expected);
        assert_eq!(bus.get_register(CEC_ADDR_L), Some((expected & 0xFF) as u8));
        assert_eq!(bus.get_register(CEC_ADDR_H), Some((expected >> 8) as u8));
    }

    #[test]
    fn low_half_written_before_high() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let mut cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();
        bus.clear_writes();

        cec.set_logical_address(LogicalAddress::PLAYBACK_1.into());

        assert_eq!(bus.writes(), [(CEC_ADDR_L, 0x10), (CEC_ADDR_H, 0x80)]);
    }

    #[test]
    fn invalid_releases_everything() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let mut cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();

        cec.set_logical_address(addr(2).into());
        cec.set_logical_address(addr(13).into());
        bus.clear_writes();

        cec.set_logical_address(LogicalAddressRequest::Invalid);

        assert_eq!(cec.claimed_addresses(), AddressMask::EMPTY);
        assert!(!cec.claimed_addresses().is_active());
        assert_eq!(bus.writes(), [(CEC_ADDR_L, 0), (CEC_ADDR_H, 0)]);
    }

    #[test]
    fn claiming_after_release_starts_fresh() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let mut cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();

        cec.set_logical_address(addr(5).into());
        cec.set_logical_address(LogicalAddressRequest::Invalid);
        cec.set_logical_address(addr(1).into());

        assert_eq!(cec.claimed_addresses().bits(), 0x8002);
    }
}
