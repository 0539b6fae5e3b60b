//! Core DesignWare HDMI CEC driver.
//!
//! This module contains the main [`Cec`] structure: the command half of the
//! controller that the adapter framework drives. Commands are split across
//! modules the same way the hardware is:
//!
//! - [`filtering`](super::filtering): logical address filter
//! - [`transmit`](super::transmit): frame transmission
//! - [`power`](super::power): enable/disable transitions
//!
//! The interrupt half is [`CecIrq`], created from a `Cec` with
//! [`Cec::irq_handler`] or directly from the bus and the shared state.

use super::config::{AdapterInfo, CecConfig};
use super::error::Result;
use super::filtering::AddressMask;
use super::interrupt::CecIrq;
use super::power::PowerState;
use super::state::ControllerState;
use crate::hal::{HardwareGate, RegisterBus};
use crate::internal::register::CecRegs;

// =============================================================================
// CEC Driver
// =============================================================================

/// DesignWare HDMI CEC controller, command side.
///
/// Takes `&mut self` for every command: the adapter framework serializes
/// address, transmit and enable requests. The interrupt and deferred contexts
/// only share the [`ControllerState`] and the register bus.
///
/// # Example
/// ```ignore
/// static CEC_STATE: ControllerState = ControllerState::new();
///
/// let config = CecConfig::new().with_base(HDMI_BASE).with_irq(HDMI_IRQ);
/// let bus = unsafe { MmioBus::from_config(&config) };
/// let mut cec = Cec::new(&bus, &CEC_STATE, NoGate, config)?;
///
/// cec.enable(true);
/// cec.set_logical_address(LogicalAddress::PLAYBACK_1.into());
/// cec.transmit(2, 0, &CecFrame::poll(4, 0))?;
/// ```
pub struct Cec<'a, B: RegisterBus + ?Sized, G: HardwareGate> {
    pub(super) regs: CecRegs<'a, B>,
    pub(super) state: &'a ControllerState,
    pub(super) gate: G,
    pub(super) config: CecConfig,
    pub(super) power: PowerState,
    pub(super) addresses: AddressMask,
}

impl<'a, B: RegisterBus + ?Sized, G: HardwareGate> Cec<'a, B, G> {
    /// Create the controller and quiesce the hardware.
    ///
    /// Clears the transmit count, masks and mutes every CEC interrupt and
    /// clears the polarity register. The controller starts `Disabled` with no
    /// claimed addresses; the gate is not touched.
    pub fn new(
        bus: &'a B,
        state: &'a ControllerState,
        gate: G,
        config: CecConfig,
    ) -> Result<Self> {
        config.validate()?;

        let regs = CecRegs::new(bus);
        regs.set_tx_cnt(0);
        regs.set_mask(0xFF);
        regs.set_ih_mute(0xFF);
        regs.set_polarity(0);

        state.reset();

        #[cfg(feature = "defmt")]
        defmt::debug!("cec: controller created (irq {})", config.irq);

        Ok(Self {
            regs,
            state,
            gate,
            config,
            power: PowerState::Disabled,
            addresses: AddressMask::EMPTY,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current power state
    #[inline(always)]
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Whether the controller is enabled
    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        self.power == PowerState::Enabled
    }

    /// Configuration the controller was created with
    pub fn config(&self) -> &CecConfig {
        &self.config
    }

    /// Interrupt line the controller raises
    pub fn irq(&self) -> u32 {
        self.config.irq
    }

    /// Shared transmit/receive state
    pub fn state(&self) -> &'a ControllerState {
        self.state
    }

    /// Hardware gate
    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Static adapter description
    pub const fn adapter_info() -> AdapterInfo {
        AdapterInfo::DW_HDMI
    }

    /// Status handler sharing this controller's bus and state
    pub fn irq_handler(&self) -> CecIrq<'a, B> {
        CecIrq::new(self.regs.bus(), self.state)
    }

    /// Release the hardware gate, consuming the driver
    pub fn free(self) -> G {
        self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::error::{ConfigError, Error};
    use crate::internal::register::{
        CEC_MASK, CEC_POLARITY, CEC_TX_CNT, IH_MUTE_CEC_STAT0,
    };
    use crate::test_utils::{MockGate, MockRegisters};

    #[test]
    fn new_quiesces_hardware() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();

        let cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new().with_irq(7)).unwrap();

        assert_eq!(
            bus.writes(),
            [
                (CEC_TX_CNT, 0),
                (CEC_MASK, 0xFF),
                (IH_MUTE_CEC_STAT0, 0xFF),
                (CEC_POLARITY, 0),
            ]
        );
        assert_eq!(cec.power_state(), PowerState::Disabled);
        assert!(cec.claimed_addresses().is_empty());
        assert_eq!(cec.irq(), 7);
        assert_eq!(cec.gate().enables(), 0);
        assert_eq!(cec.gate().disables(), 0);
    }

    #[test]
    fn new_rejects_bad_config() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();

        let result = Cec::new(
            &bus,
            &state,
            MockGate::new(),
            CecConfig::new().with_reg_shift(4),
        );

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidRegisterShift))
        ));
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn irq_handler_shares_state() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();

        let irq = cec.irq_handler();

        assert!(core::ptr::eq(irq.state(), &state));
    }

    #[test]
    fn free_returns_gate() {
        let bus = MockRegisters::new();
        let state = ControllerState::new();
        let mut cec = Cec::new(&bus, &state, MockGate::new(), CecConfig::new()).unwrap();
        cec.enable(true);

        let gate = cec.free();
        assert_eq!(gate.enables(), 1);
    }
}
