//! Partial derivatives of every output with respect to every continuous input.
//!
//! The pipeline is generic over [`Scalar`], so each column of the Jacobian
//! comes from one run with [`Dual64`] inputs, the column's input seeded with
//! a unit tangent and every other input held constant. Partials are exact for
//! the interpolants the charts define; they change abruptly where a query
//! crosses a grid node or a clamp, and are zero through a clamp.
//!
//! All partials are in the chart units of the inputs and outputs: ft, ft/s,
//! hp, slug/ft³, °R, degrees and lbf.

use crate::support::dual::{Dual64, Scalar};

use super::{NodeInputs, NodeOutputs};

/// Number of continuous inputs.
pub const INPUTS: usize = 11;

/// Number of reported outputs.
pub const OUTPUTS: usize = 11;

/// Continuous inputs that partial derivatives are taken with respect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Propeller diameter, ft.
    Diameter,
    ActivityFactor,
    IntegratedLiftCoefficient,
    /// Nacelle diameter, ft.
    NacelleDiameter,
    /// True airspeed, ft/s.
    Velocity,
    /// Tip speed, ft/s.
    TipSpeed,
    /// Shaft power, hp.
    ShaftPower,
    /// Density, slug/ft³.
    Density,
    /// Static temperature, °R.
    Temperature,
    Mach,
    InstallationLossFactor,
}

impl Input {
    /// Every input, in seeding order.
    pub const ALL: [Self; INPUTS] = [
        Self::Diameter,
        Self::ActivityFactor,
        Self::IntegratedLiftCoefficient,
        Self::NacelleDiameter,
        Self::Velocity,
        Self::TipSpeed,
        Self::ShaftPower,
        Self::Density,
        Self::Temperature,
        Self::Mach,
        Self::InstallationLossFactor,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Outputs that partial derivatives are reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    ThrustCoefficient,
    CompressibilityFactor,
    CorrectedThrustCoefficient,
    /// Blade angle, degrees.
    BladeAngle,
    /// Installed thrust, lbf.
    Thrust,
    Efficiency,
    InstallationLossFactor,
    InstalledEfficiency,
    AdvanceRatio,
    PowerCoefficient,
    HelicalTipMach,
}

impl Output {
    /// Every output, in row order.
    pub const ALL: [Self; OUTPUTS] = [
        Self::ThrustCoefficient,
        Self::CompressibilityFactor,
        Self::CorrectedThrustCoefficient,
        Self::BladeAngle,
        Self::Thrust,
        Self::Efficiency,
        Self::InstallationLossFactor,
        Self::InstalledEfficiency,
        Self::AdvanceRatio,
        Self::PowerCoefficient,
        Self::HelicalTipMach,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Partial derivatives of one node's outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Jacobian {
    rows: [[f64; INPUTS]; OUTPUTS],
}

impl Jacobian {
    /// Returns `∂output / ∂input`.
    #[must_use]
    pub fn get(&self, output: Output, input: Input) -> f64 {
        self.rows[output.index()][input.index()]
    }

    /// Returns the partials of `output` indexed like [`Input::ALL`].
    #[must_use]
    pub fn row(&self, output: Output) -> &[f64; INPUTS] {
        &self.rows[output.index()]
    }

    /// Assembles the Jacobian column by column from seeded evaluations.
    pub(crate) fn from_columns(mut column: impl FnMut(Input) -> NodeOutputs<Dual64>) -> Self {
        let mut rows = [[0.0; INPUTS]; OUTPUTS];
        for input in Input::ALL {
            let outputs = column(input);
            for output in Output::ALL {
                rows[output.index()][input.index()] = outputs.get(output).eps;
            }
        }
        Self { rows }
    }
}

impl NodeInputs<f64> {
    /// Lifts the inputs to dual numbers, seeding only `input`.
    pub(crate) fn seeded(&self, input: Input) -> NodeInputs<Dual64> {
        let mut seeded = NodeInputs {
            diameter: Dual64::from(self.diameter),
            activity_factor: Dual64::from(self.activity_factor),
            lift_coefficient: Dual64::from(self.lift_coefficient),
            nacelle_diameter: Dual64::from(self.nacelle_diameter),
            velocity: Dual64::from(self.velocity),
            tip_speed: Dual64::from(self.tip_speed),
            shaft_power: Dual64::from(self.shaft_power),
            density: Dual64::from(self.density),
            temperature: Dual64::from(self.temperature),
            mach: Dual64::from(self.mach),
            installation_loss: Dual64::from(self.installation_loss),
        };
        *seeded.field_mut(input) = Dual64::new(self.field(input), 1.0);
        seeded
    }
}

impl<S: Copy> NodeInputs<S> {
    /// Returns a copy with `input` replaced by `value`.
    #[cfg(test)]
    pub(crate) fn with(mut self, input: Input, value: S) -> Self {
        *self.field_mut(input) = value;
        self
    }

    pub(crate) fn field(&self, input: Input) -> S {
        let mut copy = *self;
        *copy.field_mut(input)
    }

    fn field_mut(&mut self, input: Input) -> &mut S {
        match input {
            Input::Diameter => &mut self.diameter,
            Input::ActivityFactor => &mut self.activity_factor,
            Input::IntegratedLiftCoefficient => &mut self.lift_coefficient,
            Input::NacelleDiameter => &mut self.nacelle_diameter,
            Input::Velocity => &mut self.velocity,
            Input::TipSpeed => &mut self.tip_speed,
            Input::ShaftPower => &mut self.shaft_power,
            Input::Density => &mut self.density,
            Input::Temperature => &mut self.temperature,
            Input::Mach => &mut self.mach,
            Input::InstallationLossFactor => &mut self.installation_loss,
        }
    }
}

impl<S: Scalar> NodeOutputs<S> {
    pub(crate) fn get(&self, output: Output) -> S {
        match output {
            Output::ThrustCoefficient => self.thrust_coefficient,
            Output::CompressibilityFactor => self.compressibility_factor,
            Output::CorrectedThrustCoefficient => self.corrected_thrust_coefficient,
            Output::BladeAngle => self.blade_angle,
            Output::Thrust => self.thrust,
            Output::Efficiency => self.efficiency,
            Output::InstallationLossFactor => self.installation_loss_factor,
            Output::InstalledEfficiency => self.installed_efficiency,
            Output::AdvanceRatio => self.advance_ratio,
            Output::PowerCoefficient => self.power_coefficient,
            Output::HelicalTipMach => self.helical_tip_mach,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::aero::propeller::core::test_support::chart_inputs;

    #[test]
    fn each_input_seeds_its_own_partial() {
        let inputs = chart_inputs(1);
        for input in Input::ALL {
            let seeded = inputs.seeded(input);
            for other in Input::ALL {
                let value = seeded.field(other);
                assert_eq!(value.re, inputs.field(other));
                assert_eq!(value.eps, if other == input { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn columns_land_under_their_input() {
        let jacobian = Jacobian::from_columns(|input| {
            let zero = Dual64::from(0.0);
            NodeOutputs {
                thrust_coefficient: zero,
                compressibility_factor: zero,
                corrected_thrust_coefficient: zero,
                blade_angle: zero,
                thrust: Dual64::new(0.0, input.index() as f64),
                efficiency: zero,
                installation_loss_factor: zero,
                installed_efficiency: zero,
                advance_ratio: zero,
                power_coefficient: zero,
                helical_tip_mach: zero,
            }
        });
        for input in Input::ALL {
            assert_eq!(jacobian.get(Output::Thrust, input), input.index() as f64);
            assert_eq!(jacobian.get(Output::Efficiency, input), 0.0);
        }
    }
}
