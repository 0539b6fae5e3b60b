//! Register bus abstraction
//!
//! The CEC block sits inside the HDMI transmitter's register space. Depending
//! on the SoC the HDMI core is either directly memory mapped (byte registers,
//! or byte registers on a 32-bit stride) or reached through accessors owned
//! by the HDMI bridge driver. [`RegisterBus`] covers all of these.

use crate::driver::config::CecConfig;

/// Byte-wide access to the HDMI register space.
///
/// Implementations must not reorder a write after a subsequent write to the
/// same bus. No other ordering or atomicity is required; multi-byte fields
/// are written as ordered byte writes by the driver.
pub trait RegisterBus {
    /// Read the byte register at `offset`
    fn read(&self, offset: u16) -> u8;

    /// Write the byte register at `offset`
    fn write(&self, offset: u16, value: u8);
}

impl<T: RegisterBus + ?Sized> RegisterBus for &T {
    #[inline(always)]
    fn read(&self, offset: u16) -> u8 {
        (**self).read(offset)
    }

    #[inline(always)]
    fn write(&self, offset: u16, value: u8) {
        (**self).write(offset, value);
    }
}

/// Memory-mapped register bus using volatile byte accesses.
///
/// Register `offset` lives at `base + (offset << reg_shift)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmioBus {
    base: usize,
    reg_shift: u8,
}

impl MmioBus {
    /// Create a bus over the HDMI register window at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point at the HDMI transmitter's register window, mapped
    /// for the lifetime of the bus, and large enough for every CEC register
    /// at the given stride.
    pub const unsafe fn new(base: usize, reg_shift: u8) -> Self {
        Self { base, reg_shift }
    }

    /// Create a bus from a driver configuration.
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioBus::new`] for `config.base`.
    pub const unsafe fn from_config(config: &CecConfig) -> Self {
        Self {
            base: config.base,
            reg_shift: config.reg_shift,
        }
    }

    /// Base address of the register window
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Address of the register at `offset`
    #[inline(always)]
    pub const fn address(&self, offset: u16) -> usize {
        self.base + ((offset as usize) << self.reg_shift)
    }
}

impl RegisterBus for MmioBus {
    #[inline(always)]
    fn read(&self, offset: u16) -> u8 {
        // SAFETY: `new` requires the window to be mapped for every CEC offset
        unsafe { core::ptr::read_volatile(self.address(offset) as *const u8) }
    }

    #[inline(always)]
    fn write(&self, offset: u16, value: u8) {
        // SAFETY: `new` requires the window to be mapped for every CEC offset
        unsafe { core::ptr::write_volatile(self.address(offset) as *mut u8, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::register::CEC_CTRL;

    #[test]
    fn address_without_stride() {
        // SAFETY: address computation only, never dereferenced
        let bus = unsafe { MmioBus::new(0x0012_0000, 0) };
        assert_eq!(bus.address(CEC_CTRL), 0x0012_7D00);
    }

    #[test]
    fn address_with_word_stride() {
        // SAFETY: address computation only, never dereferenced
        let bus = unsafe { MmioBus::new(0xFF94_0000, 2) };
        assert_eq!(bus.address(CEC_CTRL), 0xFF94_0000 + (0x7D00 << 2));
    }

    #[test]
    fn from_config_copies_window() {
        let config = CecConfig::new().with_base(0x1000).with_reg_shift(2);
        // SAFETY: address computation only, never dereferenced
        let bus = unsafe { MmioBus::from_config(&config) };
        assert_eq!(bus.base(), 0x1000);
        assert_eq!(bus.address(1), 0x1004);
    }

    #[test]
    fn volatile_access_round_trips_through_memory() {
        let mut window = [0u8; 8];
        // SAFETY: the window outlives the bus and covers offsets 0..8
        let bus = unsafe { MmioBus::new(window.as_mut_ptr() as usize, 0) };

        bus.write(5, 0x5A);
        assert_eq!(bus.read(5), 0x5A);
        assert_eq!(bus.read(4), 0);
    }
}
