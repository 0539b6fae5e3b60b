//! Configuration types for the DesignWare HDMI CEC driver

use super::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    ADAPTER_NAME, BROADCAST_ADDR, LOG_ADDR_INVALID, MAX_CLAIMABLE_ADDR, MAX_LOG_ADDRS,
    MAX_REG_SHIFT,
};

// =============================================================================
// Hardware Link
// =============================================================================

/// Link to the parent HDMI transmitter.
///
/// # Example
/// ```ignore
/// let config = CecConfig::new()
///     .with_base(0x0012_0000)
///     .with_irq(115);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CecConfig {
    /// Base address of the HDMI register window
    pub base: usize,
    /// Interrupt line shared with the HDMI transmitter
    pub irq: u32,
    /// Register stride: register `n` lives at `base + (n << reg_shift)`
    pub reg_shift: u8,
}

impl CecConfig {
    /// Default configuration: byte-spaced registers at address 0, IRQ 0
    pub const fn new() -> Self {
        Self {
            base: 0,
            irq: 0,
            reg_shift: 0,
        }
    }

    /// Set the HDMI register window base address
    #[must_use]
    pub const fn with_base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    /// Set the interrupt line
    #[must_use]
    pub const fn with_irq(mut self, irq: u32) -> Self {
        self.irq = irq;
        self
    }

    /// Set the register stride shift (0 = byte, 2 = 32-bit spacing)
    #[must_use]
    pub const fn with_reg_shift(mut self, reg_shift: u8) -> Self {
        self.reg_shift = reg_shift;
        self
    }

    /// Check the configuration
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.reg_shift > MAX_REG_SHIFT {
            return Err(ConfigError::InvalidRegisterShift);
        }
        Ok(())
    }
}

impl Default for CecConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Logical Addresses
// =============================================================================

/// A claimable CEC logical address (0-14).
///
/// Address 15 is the broadcast / unregistered address and cannot be claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogicalAddress(u8);

impl LogicalAddress {
    /// TV
    pub const TV: Self = Self(0);
    /// Recording device 1
    pub const RECORD_1: Self = Self(1);
    /// Playback device 1
    pub const PLAYBACK_1: Self = Self(4);
    /// Audio system
    pub const AUDIO_SYSTEM: Self = Self(5);
    /// Specific use
    pub const SPECIFIC: Self = Self(14);

    /// Validate a raw address
    pub const fn new(addr: u8) -> ConfigResult<Self> {
        if addr > MAX_CLAIMABLE_ADDR {
            return Err(ConfigError::InvalidLogicalAddress);
        }
        Ok(Self(addr))
    }

    /// Raw address value
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bit of this address in the filter bitmap
    #[inline(always)]
    pub const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl TryFrom<u8> for LogicalAddress {
    type Error = ConfigError;

    fn try_from(addr: u8) -> ConfigResult<Self> {
        Self::new(addr)
    }
}

impl From<LogicalAddress> for u8 {
    fn from(addr: LogicalAddress) -> Self {
        addr.0
    }
}

/// Address filter request from the adapter framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalAddressRequest {
    /// Add an address to the claimed set
    Claim(LogicalAddress),
    /// Release every claimed address
    Invalid,
}

impl LogicalAddressRequest {
    /// Decode the framework's raw encoding (0-14, or 0xFF to release)
    pub const fn from_raw(raw: u8) -> ConfigResult<Self> {
        if raw == LOG_ADDR_INVALID {
            return Ok(Self::Invalid);
        }
        match LogicalAddress::new(raw) {
            Ok(addr) => Ok(Self::Claim(addr)),
            Err(e) => Err(e),
        }
    }
}

impl From<LogicalAddress> for LogicalAddressRequest {
    fn from(addr: LogicalAddress) -> Self {
        Self::Claim(addr)
    }
}

/// Whether `addr` is the broadcast destination
pub const fn is_broadcast(addr: u8) -> bool {
    addr == BROADCAST_ADDR
}

// =============================================================================
// Adapter Description
// =============================================================================

/// Capabilities advertised to the adapter framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities(u8);

impl Capabilities {
    /// The framework may configure logical addresses
    pub const LOG_ADDRS: Self = Self(1 << 0);
    /// The framework may transmit frames
    pub const TRANSMIT: Self = Self(1 << 1);
    /// Remote control passthrough
    pub const RC: Self = Self(1 << 2);

    /// Capabilities of this controller
    pub const ADAPTER: Self = Self(Self::LOG_ADDRS.0 | Self::TRANSMIT.0 | Self::RC.0);

    /// Raw capability bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every capability in `other` is present
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Static description of the adapter this driver backs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdapterInfo {
    /// Adapter name
    pub name: &'static str,
    /// Advertised capabilities
    pub capabilities: Capabilities,
    /// Maximum number of simultaneously claimed logical addresses
    pub max_log_addrs: usize,
}

impl AdapterInfo {
    /// Description of the DesignWare HDMI CEC adapter
    pub const DW_HDMI: Self = Self {
        name: ADAPTER_NAME,
        capabilities: Capabilities::ADAPTER,
        max_log_addrs: MAX_LOG_ADDRS,
    };
}
