//! Centralized Constants
//!
//! Single source of truth for the protocol-level numbers used by the CEC
//! driver.
//!
//! # Note
//!
//! Hardware register offsets and bit definitions live in
//! [`register`](super::register), next to the accessors that use them.

// =============================================================================
// Frame Sizes
// =============================================================================

/// Maximum CEC frame length in bytes (header + opcode + 14 operands)
pub const MAX_FRAME_LEN: usize = 16;

/// Number of transmit/receive data registers in the controller
pub const DATA_REGISTER_COUNT: usize = 16;

// =============================================================================
// Logical Addresses
// =============================================================================

/// Highest logical address a controller can claim
pub const MAX_CLAIMABLE_ADDR: u8 = 14;

/// Broadcast (as destination) / unregistered (as initiator) logical address
pub const BROADCAST_ADDR: u8 = 15;

/// Framework sentinel meaning "release every claimed address"
pub const LOG_ADDR_INVALID: u8 = 0xff;

/// Address filter bit flagging that at least one address is claimed
pub const ADDR_FILTER_ACTIVE: u16 = 1 << 15;

// =============================================================================
// Adapter Description
// =============================================================================

/// Name the adapter registers under
pub const ADAPTER_NAME: &str = "dw_hdmi";

/// Maximum number of logical addresses the adapter may hold at once
pub const MAX_LOG_ADDRS: usize = 4;

// =============================================================================
// Register Access
// =============================================================================

/// Largest supported register stride shift (32-bit spaced registers)
pub const MAX_REG_SHIFT: u8 = 2;
