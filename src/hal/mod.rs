//! Hardware Abstraction Layer
//!
//! External collaborators of the CEC engine, expressed as traits so the
//! driver can run on any SoC that integrates the DesignWare HDMI transmitter.
//!
//! # Modules
//!
//! - [`bus`]: Byte-wide register access ([`RegisterBus`], [`MmioBus`])
//! - [`gate`]: CEC clock/line gate owned by the HDMI transmitter
//!   ([`HardwareGate`], [`NoGate`], [`PinGate`])
//!
//! # GPIO Integration
//!
//! [`PinGate`] accepts any `embedded_hal::digital::OutputPin` from your HAL.

pub mod bus;
pub mod gate;

// Re-export commonly used types
pub use bus::{MmioBus, RegisterBus};
pub use gate::{HardwareGate, NoGate, PinGate};
