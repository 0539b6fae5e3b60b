//! Power state transitions for the DesignWare HDMI CEC controller.
//!
//! The controller is either `Disabled` (every CEC interrupt masked and muted,
//! hardware gate released) or `Enabled` (exactly the four handled events
//! unmasked). Transitions only happen on request from the adapter framework.

use super::cec::Cec;
use super::config::LogicalAddressRequest;
use super::filtering::AddressMask;
use crate::hal::{HardwareGate, RegisterBus};
use crate::internal::register::CEC_ENABLED_IRQS;

/// Power state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Interrupts masked, gate released
    #[default]
    Disabled,
    /// Interrupts unmasked, gate held
    Enabled,
}

impl<B: RegisterBus + ?Sized, G: HardwareGate> Cec<'_, B, G> {
    /// Enable or disable the controller.
    ///
    /// Requesting the current state does nothing, so the hardware gate sees
    /// exactly one call per transition. Disabling with a transmit in flight
    /// abandons it without a completion event.
    ///
    /// Disabling forgets the claimed addresses. The filter registers keep
    /// their last value until the next enable clears them.
    pub fn enable(&mut self, on: bool) {
        match (self.power, on) {
            (PowerState::Disabled, true) => self.power_up(),
            (PowerState::Enabled, false) => self.power_down(),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::trace!("cec: already {}", self.power);
            }
        }
    }

    fn power_up(&mut self) {
        self.regs.set_ctrl(0);
        // Drop anything latched while disabled
        self.regs.set_ih_stat(0xFF);
        self.regs.set_lock(0);

        self.set_logical_address(LogicalAddressRequest::Invalid);
        self.state.reset();

        self.gate.enable();

        self.regs.set_polarity(CEC_ENABLED_IRQS);
        self.regs.set_mask(!CEC_ENABLED_IRQS);
        self.regs.set_ih_mute(!CEC_ENABLED_IRQS);

        self.power = PowerState::Enabled;

        #[cfg(feature = "defmt")]
        defmt::debug!("cec: enabled");
    }

    fn power_down(&mut self) {
        self.regs.set_mask(0xFF);
        self.regs.set_ih_mute(0xFF);
        self.regs.set_polarity(0);

        self.gate.disable();

        self.addresses = AddressMask::EMPTY;
        self.power = PowerState::Disabled;

        #[cfg(feature = "defmt")]
        defmt::debug!("cec: disabled");
    }
}
