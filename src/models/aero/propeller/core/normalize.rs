//! Dimensionless groups the charts are indexed by.

use std::f64::consts::PI;

use crate::support::dual::Scalar;

use super::{Degeneracy, Diagnostics, NodeInputs};

/// Velocity floor in ft/s that keeps the static condition defined.
pub(crate) const VELOCITY_FLOOR: f64 = 1e-6;

/// Ratio of specific heats for air.
const GAMMA: f64 = 1.4;

/// Gas constant for air in ft·lbf/(slug·°R).
const GAS_CONSTANT: f64 = 1716.49;

/// Foot-pounds per second in one horsepower.
const FT_LBF_PER_HP_S: f64 = 550.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Normalized<S> {
    pub(crate) advance_ratio: S,
    pub(crate) power_coefficient: S,
    pub(crate) helical_tip_mach: S,
}

/// Computes advance ratio, power coefficient and helical tip Mach number.
///
/// With rotational speed `n = V_tip / (π D)`:
///
/// - `J = V / (n D) = π V / V_tip`
/// - `Cp = P / (ρ n³ D⁵) = 550 π³ P / (ρ V_tip³ D²)`
/// - `M_h = sqrt(M² + (V_tip / a)²)`
pub(crate) fn normalize<S: Scalar>(
    inputs: &NodeInputs<S>,
    diagnostics: &mut Diagnostics,
) -> Normalized<S> {
    if inputs.velocity.re() < VELOCITY_FLOOR {
        diagnostics.degenerate(Degeneracy::VelocityFloor);
    }
    let velocity = inputs.velocity.at_least(VELOCITY_FLOOR);
    let tip_speed = inputs.tip_speed;
    let diameter = inputs.diameter;

    let advance_ratio = velocity * PI / tip_speed;
    let power_coefficient = inputs.shaft_power * (FT_LBF_PER_HP_S * PI.powi(3))
        / (inputs.density * tip_speed * tip_speed * tip_speed * diameter * diameter);

    let speed_of_sound = (inputs.temperature * (GAMMA * GAS_CONSTANT)).sqrt();
    let tip_mach = tip_speed / speed_of_sound;
    let helical_tip_mach = (inputs.mach * inputs.mach + tip_mach * tip_mach).sqrt();

    Normalized {
        advance_ratio,
        power_coefficient,
        helical_tip_mach,
    }
}
