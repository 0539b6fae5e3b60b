//! Core driver components for the DesignWare HDMI CEC controller.
//!
//! This module contains the building blocks for operating the controller:
//!
//! - [`config`] - Hardware link, logical addresses and adapter description
//! - [`error`] - Error types and result aliases
//! - [`frame`] - CEC frame buffer
//! - [`cec`] - The command half of the controller
//! - [`filtering`] - Logical address filter
//! - [`transmit`] - Frame transmission
//! - [`power`] - Enable/disable transitions
//! - [`interrupt`] - Latency-critical status handler
//! - [`dispatch`] - Deferred completion delivery
//! - [`state`] - State shared between the two contexts
//!
//! # Example
//!
//! ```ignore
//! use dw_hdmi_cec::driver::{Cec, CecConfig, ControllerState, Error};
//!
//! static CEC_STATE: ControllerState = ControllerState::new();
//!
//! let config = CecConfig::new().with_base(0x0012_0000).with_irq(115);
//! ```

// Submodules
pub mod cec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filtering;
pub mod frame;
pub mod interrupt;
pub mod power;
pub mod state;
pub mod transmit;

// Re-exports for convenience
pub use cec::Cec;
pub use config::{
    AdapterInfo, Capabilities, CecConfig, LogicalAddress, LogicalAddressRequest, is_broadcast,
};
pub use dispatch::{CecEvents, Dispatched, TransmitDone};
pub use error::{
    ConfigError, ConfigResult, Error, FrameError, FrameResult, IoError, Result,
};
pub use filtering::AddressMask;
pub use frame::CecFrame;
pub use interrupt::{CecIrq, CecStatus, IrqReturn, TxEvent};
pub use power::PowerState;
pub use state::{ControllerState, TransmitStatus};
