//! Dimensional thrust and free-air efficiency.
//!
//! Efficiency is zero when the power coefficient is too small to divide by,
//! and is capped at one where the charts would otherwise exceed it.

use std::f64::consts::PI;

use crate::support::dual::Scalar;

use super::{Degeneracy, Diagnostics};

/// Power coefficient at or below which efficiency is defined as zero.
const MIN_POWER_COEFFICIENT: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub(crate) struct FreeAir<S> {
    /// Pounds force, before installation losses.
    pub(crate) thrust: S,
    pub(crate) efficiency: S,
}

/// Dimensional thrust and propeller efficiency from the corrected thrust
/// coefficient.
///
/// Thrust is `Ct ρ n² D⁴ = Ct ρ V_tip² D² / π²` and efficiency is `J Ct / Cp`,
/// which equals `T V / P`. The thrust coefficient is expected to be
/// non-negative, so efficiency lies in `[0, 1]`.
pub(crate) fn assemble<S: Scalar>(
    corrected_thrust_coefficient: S,
    density: S,
    tip_speed: S,
    diameter: S,
    advance_ratio: S,
    power_coefficient: S,
    diagnostics: &mut Diagnostics,
) -> FreeAir<S> {
    let thrust = corrected_thrust_coefficient * density * tip_speed * tip_speed * diameter
        * diameter
        / (PI * PI);

    let efficiency = if power_coefficient.re() > MIN_POWER_COEFFICIENT {
        let efficiency = advance_ratio * corrected_thrust_coefficient / power_coefficient;
        if efficiency.re() > 1.0 {
            diagnostics.degenerate(Degeneracy::EfficiencyAboveOne);
        }
        efficiency.at_most(1.0)
    } else {
        diagnostics.degenerate(Degeneracy::ZeroPowerCoefficient);
        S::zero()
    };

    FreeAir { thrust, efficiency }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{models::aero::propeller::core::Diagnostic, support::dual::Dual64};

    #[test]
    fn efficiency_matches_thrust_power_ratio() {
        let (density, tip_speed, diameter, velocity, power_hp) =
            (0.002_376_9, 800.0, 10.5, 210.0, 1850.0);
        let advance_ratio = PI * velocity / tip_speed;
        let power_coefficient = 550.0 * PI.powi(3) * power_hp
            / (density * tip_speed * tip_speed * tip_speed * diameter * diameter);

        let mut diagnostics = Diagnostics::default();
        let result = assemble(
            0.2,
            density,
            tip_speed,
            diameter,
            advance_ratio,
            power_coefficient,
            &mut diagnostics,
        );

        assert_relative_eq!(
            result.efficiency,
            result.thrust * velocity / (550.0 * power_hp),
            max_relative = 1e-12
        );
        assert!(diagnostics.into_vec().is_empty());
    }

    #[test]
    fn zero_power_gives_zero_efficiency() {
        let mut diagnostics = Diagnostics::default();
        let result = assemble(0.05, 0.002, 800.0, 10.0, 1.0, 0.0, &mut diagnostics);

        assert_relative_eq!(result.efficiency, 0.0);
        assert!(result.thrust > 0.0);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::Degeneracy(Degeneracy::ZeroPowerCoefficient)]
        );
    }

    #[test]
    fn efficiency_is_capped_at_one() {
        let mut diagnostics = Diagnostics::default();
        let result = assemble(
            Dual64::from(0.5),
            Dual64::from(0.002),
            Dual64::from(800.0),
            Dual64::from(10.0),
            Dual64::new(2.0, 1.0),
            Dual64::from(0.1),
            &mut diagnostics,
        );

        assert_relative_eq!(result.efficiency.re, 1.0);
        assert_relative_eq!(result.efficiency.eps, 0.0);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::Degeneracy(Degeneracy::EfficiencyAboveOne)]
        );
    }
}
