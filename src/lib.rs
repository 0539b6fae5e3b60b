//! DesignWare HDMI CEC Driver
//!
//! A `no_std`, `no_alloc` Rust implementation of the CEC (Consumer Electronics
//! Control) engine found in Synopsys DesignWare HDMI transmitters.
//!
//! CEC is a half-duplex, single-wire, multi-drop bus carried over the HDMI
//! connector. Devices exchange frames of at most 16 bytes; the first byte packs
//! the initiator and destination logical addresses.
//!
//! # Architecture
//!
//! The driver is split the same way the work is split at runtime:
//!
//! 1. **Command half** ([`Cec`]): address filter, transmit and power state.
//!    Called synchronously by the adapter framework, takes `&mut self`.
//! 2. **Status handler** ([`CecIrq`]): runs in the interrupt, acknowledges
//!    status, retries transmits in place and copies received frames out.
//! 3. **Completion dispatcher** ([`ControllerState::dispatch`]): runs in a
//!    deferred context and delivers events to a [`CecEvents`] sink.
//!
//! The status handler and the dispatcher share a [`ControllerState`] through
//! atomics only; no lock is taken on the interrupt path.
//!
//! Register access goes through [`hal::RegisterBus`]. [`hal::MmioBus`] maps it
//! onto the HDMI block; tests use a mock.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and driver logging
//! - `critical-section`: Enable ISR-safe `SharedCec` wrapper
//! - `async`: Enable async/await support for the dispatcher
//!
//! # Example
//!
//! ```ignore
//! use dw_hdmi_cec::{Cec, CecConfig, CecFrame, CecIrq, ControllerState, IrqReturn, LogicalAddress};
//! use dw_hdmi_cec::hal::{MmioBus, NoGate};
//!
//! static CEC_STATE: ControllerState = ControllerState::new();
//!
//! let config = CecConfig::new().with_base(0x0012_0000).with_irq(115);
//! let bus = unsafe { MmioBus::from_config(&config) };
//!
//! let mut cec = Cec::new(&bus, &CEC_STATE, NoGate, config)?;
//! cec.enable(true);
//! cec.set_logical_address(LogicalAddress::PLAYBACK_1.into());
//! cec.transmit(2, 0, &CecFrame::poll(4, 0))?;
//!
//! // Interrupt
//! if CecIrq::new(&bus, &CEC_STATE).handle() == IrqReturn::WakeThread {
//!     // schedule the dispatcher
//! }
//!
//! // Deferred context
//! CEC_STATE.dispatch(&mut framework);
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] tables in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;

// Internal implementation details
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::cec::Cec;
pub use driver::config::{
    AdapterInfo, Capabilities, CecConfig, LogicalAddress, LogicalAddressRequest,
};
pub use driver::dispatch::{CecEvents, Dispatched, TransmitDone};
pub use driver::error::{
    ConfigError, ConfigResult, Error, FrameError, FrameResult, IoError, Result,
};
pub use driver::filtering::AddressMask;
pub use driver::frame::CecFrame;
pub use driver::interrupt::{CecIrq, CecStatus, IrqReturn};
pub use driver::power::PowerState;
pub use driver::state::{ControllerState, TransmitStatus};

/// Low-level register accessors for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer the driver APIs instead of touching registers directly.
///
/// Direct register access bypasses driver invariants: writing the control or
/// status registers behind the driver's back can start transmits or lose
/// interrupts.
pub mod registers {
    pub use crate::internal::register::*;
}

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedCec;

// Re-export async types when async feature is enabled
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub use sync::asynch::{AsyncCecState, async_interrupt_handler};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Adapter
        ADAPTER_NAME,
        // Address filter
        ADDR_FILTER_ACTIVE,
        BROADCAST_ADDR,
        DATA_REGISTER_COUNT,
        LOG_ADDR_INVALID,
        MAX_CLAIMABLE_ADDR,
        // Frame sizes
        MAX_FRAME_LEN,
        MAX_LOG_ADDRS,
        // Register access
        MAX_REG_SHIFT,
    };
}
