//! Tip-loss correction for compressible flow at the blade tips.

use crate::support::dual::Scalar;

use super::{
    ChartTable, Diagnostics,
    tables::{CRITICAL_MACH, MACH_LOSS},
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Compressibility<S> {
    /// Multiplier on the thrust coefficient, in `(0, 1]`.
    pub(crate) factor: S,
    pub(crate) corrected_thrust_coefficient: S,
}

/// Applies the compressibility loss to a chart thrust coefficient.
///
/// The critical helical tip Mach number depends on the design lift
/// coefficient and the blade angle. Below it there is no loss; above it the
/// loss grows with the excess Mach number.
pub(crate) fn correct<S: Scalar>(
    thrust_coefficient: S,
    helical_tip_mach: S,
    lift_coefficient: S,
    blade_angle: S,
    diagnostics: &mut Diagnostics,
) -> Compressibility<S> {
    let critical = diagnostics.record(
        ChartTable::CriticalMach,
        CRITICAL_MACH.eval(lift_coefficient, blade_angle),
    );
    let excess = helical_tip_mach - critical;

    let factor = if excess.re() > 0.0 {
        let loss = diagnostics.record(ChartTable::CompressibilityLoss, MACH_LOSS.eval(excess));
        S::one() - loss
    } else {
        S::one()
    };

    Compressibility {
        factor,
        corrected_thrust_coefficient: thrust_coefficient * factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::dual::Dual64;

    #[test]
    fn no_loss_below_critical_mach() {
        let mut diagnostics = Diagnostics::default();
        let result = correct(0.2, 0.7, 0.5, 30.0, &mut diagnostics);

        assert_relative_eq!(result.factor, 1.0);
        assert_relative_eq!(result.corrected_thrust_coefficient, 0.2);
    }

    #[test]
    fn loss_grows_with_tip_mach() {
        let mut diagnostics = Diagnostics::default();
        let mut previous = 1.0;
        for mach in [0.88, 0.9, 0.95, 1.0, 1.1] {
            let result = correct(0.2, mach, 0.5, 30.0, &mut diagnostics);
            assert!(result.factor < previous);
            assert!(result.factor > 0.0);
            previous = result.factor;
        }
    }

    #[test]
    fn high_lift_blades_lose_thrust_earlier() {
        let mut diagnostics = Diagnostics::default();
        let reference = correct(0.2, 0.86, 0.5, 30.0, &mut diagnostics);
        let high_lift = correct(0.2, 0.86, 0.7, 30.0, &mut diagnostics);

        assert_relative_eq!(reference.factor, 1.0);
        assert!(high_lift.factor < 1.0);
    }

    #[test]
    fn factor_is_constant_below_critical() {
        let result = correct(
            Dual64::from(0.2),
            Dual64::new(0.7, 1.0),
            Dual64::from(0.5),
            Dual64::from(30.0),
            &mut Diagnostics::default(),
        );
        assert_relative_eq!(result.factor.eps, 0.0);
    }
}
