//! CEC hardware gate
//!
//! The HDMI transmitter owns the CEC clock and the CEC line driver. The CEC
//! engine asks its parent to open or close that gate on every power-state
//! transition through [`HardwareGate`].

use embedded_hal::digital::OutputPin;

/// Capability to gate the CEC clock/line of the parent HDMI transmitter.
///
/// Each method is called exactly once per power-state transition and has no
/// failure path.
pub trait HardwareGate {
    /// Ungate the CEC block
    fn enable(&mut self);

    /// Gate the CEC block
    fn disable(&mut self);
}

impl<G: HardwareGate + ?Sized> HardwareGate for &mut G {
    fn enable(&mut self) {
        (**self).enable();
    }

    fn disable(&mut self) {
        (**self).disable();
    }
}

/// Gate for integrations where the CEC clock is always running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoGate;

impl HardwareGate for NoGate {
    fn enable(&mut self) {}

    fn disable(&mut self) {}
}

/// Gate driven by a GPIO, e.g. a CEC level shifter or clock enable line.
#[derive(Debug)]
pub struct PinGate<P> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> PinGate<P> {
    /// Gate that drives the pin high to enable
    pub const fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Gate that drives the pin low to enable
    pub const fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, on: bool) {
        let result = if on != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("CEC gate pin could not be driven (enable={})", on);
        }
    }
}

impl<P: OutputPin> HardwareGate for PinGate<P> {
    fn enable(&mut self) {
        self.drive(true);
    }

    fn disable(&mut self) {
        self.drive(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockGate, MockPin};

    #[test]
    fn pin_gate_active_high() {
        let mut gate = PinGate::new(MockPin::new());

        gate.enable();
        assert_eq!(gate.pin.level(), Some(true));

        gate.disable();
        assert_eq!(gate.pin.level(), Some(false));
    }

    #[test]
    fn pin_gate_active_low() {
        let mut gate = PinGate::active_low(MockPin::new());

        gate.enable();
        assert_eq!(gate.pin.level(), Some(false));

        gate.disable();
        let pin = gate.release();
        assert_eq!(pin.level(), Some(true));
    }

    #[test]
    fn pin_gate_swallows_pin_errors() {
        let mut gate = PinGate::new(MockPin::failing());

        gate.enable();
        gate.disable();

        assert_eq!(gate.pin.level(), None);
    }

    #[test]
    fn borrowed_gate_forwards() {
        fn cycle<G: HardwareGate>(mut gate: G) {
            gate.enable();
            gate.disable();
            gate.enable();
        }

        let mut mock = MockGate::new();
        cycle(&mut mock);

        assert_eq!(mock.enables(), 2);
        assert_eq!(mock.disables(), 1);
    }
}
