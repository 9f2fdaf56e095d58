//! Blade angle and thrust coefficient from the blade-angle charts.
//!
//! Each blade family is tabulated at a handful of advance ratios. At every
//! station the stencil needs, the corrected power coefficient is located on
//! the station's power curve to find the blade angle, and the thrust curve is
//! read at that angle. The station results are then interpolated to the
//! actual advance ratio, and across blade counts when the count has no family
//! of its own.
//!
//! Below the zero-thrust blade angle the charts read a negative thrust
//! coefficient. The reading is floored at zero and reported as a degeneracy.

use crate::support::{
    dual::Scalar,
    interp::{Curve, Stencil},
};

use super::{
    ChartTable, Degeneracy, Diagnostics,
    tables::{
        ACTIVITY_FACTOR, ADVANCE_RATIOS, BLADE_COUNTS, BladeFamily, FAMILIES, LIFT_POWER,
        LIFT_THRUST, Station,
    },
};

/// Advance ratio below which the thrust activity factor correction is blended.
const STATIC_BRANCH_END: f64 = 0.5;

/// Normalized inputs to the blade-angle charts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapQuery<S> {
    pub(crate) advance_ratio: S,
    pub(crate) power_coefficient: S,
    pub(crate) activity_factor: S,
    pub(crate) lift_coefficient: S,
}

/// Chart readings at one operating point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapPoint<S> {
    /// Degrees at three-quarter span.
    pub(crate) blade_angle: S,
    pub(crate) thrust_coefficient: S,
}

impl<S: Scalar> MapPoint<S> {
    fn zero() -> Self {
        Self {
            blade_angle: S::zero(),
            thrust_coefficient: S::zero(),
        }
    }

    fn accumulate(self, other: Self, weight: S) -> Self {
        Self {
            blade_angle: self.blade_angle + weight * other.blade_angle,
            thrust_coefficient: self.thrust_coefficient + weight * other.thrust_coefficient,
        }
    }
}

/// Activity factor multipliers read for one query.
#[derive(Debug, Clone, Copy)]
struct ActivityFactor<S> {
    power_static: S,
    power_dynamic: S,
    thrust_static: S,
    thrust_dynamic: S,
}

impl<S: Scalar> ActivityFactor<S> {
    fn read(activity_factor: S, diagnostics: &mut Diagnostics) -> Self {
        let mut read = |curve: &Curve<'_>| {
            diagnostics.record(ChartTable::ActivityFactor, curve.eval(activity_factor))
        };
        Self {
            power_static: read(&ACTIVITY_FACTOR.power_static),
            power_dynamic: read(&ACTIVITY_FACTOR.power_dynamic),
            thrust_static: read(&ACTIVITY_FACTOR.thrust_static),
            thrust_dynamic: read(&ACTIVITY_FACTOR.thrust_dynamic),
        }
    }

    /// Power multiplier for the station at `index`.
    fn power(&self, index: usize) -> S {
        if index == 0 {
            self.power_static
        } else {
            self.power_dynamic
        }
    }

    /// Thrust multiplier, moving from the static row to the dynamic row as the
    /// advance ratio goes from zero to [`STATIC_BRANCH_END`].
    fn thrust(&self, advance_ratio: S) -> S {
        if advance_ratio.re() <= STATIC_BRANCH_END {
            self.thrust_static
                + advance_ratio * (self.thrust_dynamic - self.thrust_static) / STATIC_BRANCH_END
        } else {
            self.thrust_dynamic
        }
    }
}

/// Reads blade angle and thrust coefficient for `num_blades`.
///
/// Even counts up to eight read their own family. Other counts interpolate
/// across the tabulated families; counts above eight are clamped to the
/// eight-blade family and flagged.
pub(crate) fn interpolate<S: Scalar>(
    num_blades: u32,
    query: &MapQuery<S>,
    diagnostics: &mut Diagnostics,
) -> MapPoint<S> {
    let point = read_blades(num_blades, query, diagnostics);
    if point.thrust_coefficient.re() < 0.0 {
        diagnostics.degenerate(Degeneracy::NegativeThrustCoefficient);
        return MapPoint {
            thrust_coefficient: S::zero(),
            ..point
        };
    }
    point
}

fn read_blades<S: Scalar>(
    num_blades: u32,
    query: &MapQuery<S>,
    diagnostics: &mut Diagnostics,
) -> MapPoint<S> {
    let activity = ActivityFactor::read(query.activity_factor, diagnostics);

    if let Some(family) = FAMILIES.iter().find(|family| family.blades == num_blades) {
        return read_family(family, query, &activity, diagnostics);
    }

    let stencil = Stencil::locate(&BLADE_COUNTS, S::constant(f64::from(num_blades)));
    diagnostics.flag(ChartTable::BladeCount, stencil.extrapolation());
    stencil
        .weighted()
        .fold(MapPoint::zero(), |point, (index, weight)| {
            let family = read_family(FAMILIES[index], query, &activity, diagnostics);
            point.accumulate(family, weight)
        })
}

fn read_family<S: Scalar>(
    family: &BladeFamily,
    query: &MapQuery<S>,
    activity: &ActivityFactor<S>,
    diagnostics: &mut Diagnostics,
) -> MapPoint<S> {
    let stencil = Stencil::locate(&ADVANCE_RATIOS, query.advance_ratio);
    diagnostics.flag(ChartTable::AdvanceRatio, stencil.extrapolation());

    let point = stencil
        .weighted()
        .fold(MapPoint::zero(), |point, (index, weight)| {
            let power_coefficient = query.power_coefficient * activity.power(index);
            let mut station_diagnostics = Diagnostics::default();
            let station = read_station(
                &family.stations[index],
                power_coefficient,
                query.lift_coefficient,
                &mut station_diagnostics,
            );
            // Stations that only carry slope at an exact node do not report.
            if weight.re() != 0.0 {
                diagnostics.merge(station_diagnostics);
            }
            point.accumulate(station, weight)
        });

    MapPoint {
        thrust_coefficient: point.thrust_coefficient * activity.thrust(query.advance_ratio),
        ..point
    }
}

fn read_station<S: Scalar>(
    station: &Station,
    power_coefficient: S,
    lift_coefficient: S,
    diagnostics: &mut Diagnostics,
) -> MapPoint<S> {
    let lift_power = diagnostics.record(
        ChartTable::LiftPowerCorrection,
        LIFT_POWER.eval(lift_coefficient, power_coefficient),
    );
    let blade_angle = diagnostics.record(
        ChartTable::BladeAngle,
        station.power.inverse(power_coefficient * lift_power),
    );

    // The angle came from this station's own grid, so it never clamps here.
    let thrust = station.thrust.eval(blade_angle).value;
    let lift_thrust = diagnostics.record(
        ChartTable::LiftThrustCorrection,
        LIFT_THRUST.eval(lift_coefficient, thrust),
    );

    MapPoint {
        blade_angle,
        thrust_coefficient: thrust * lift_thrust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::aero::propeller::core::{
        Diagnostic, DomainWarning, tables::ADVANCE_RATIOS as STATIONS,
    };
    use crate::support::interp::Extrapolation;

    fn query(advance_ratio: f64, power_coefficient: f64) -> MapQuery<f64> {
        MapQuery {
            advance_ratio,
            power_coefficient,
            activity_factor: 150.0,
            lift_coefficient: 0.5,
        }
    }

    #[test]
    fn reference_blade_reads_station_nodes() {
        // At AF 150 and CLi 0.5 every correction is one, so a node of the
        // four-blade chart comes back unchanged.
        let station = &FAMILIES[1].stations[2];
        let angle = station.power.grid()[8];
        let power = station.power.values()[8];
        let thrust = station.thrust.values()[8];

        let mut diagnostics = Diagnostics::default();
        let point = interpolate(4, &query(STATIONS[2], power), &mut diagnostics);

        assert_relative_eq!(point.blade_angle, angle, epsilon = 1e-9);
        assert_relative_eq!(point.thrust_coefficient, thrust, epsilon = 1e-9);
        assert!(diagnostics.into_vec().is_empty());
    }

    #[test]
    fn blade_angle_rises_with_power() {
        let mut diagnostics = Diagnostics::default();
        let mut previous = 0.0;
        for power in [0.05, 0.1, 0.15, 0.2, 0.3] {
            let point = interpolate(4, &query(1.2, power), &mut diagnostics);
            assert!(point.blade_angle > previous);
            previous = point.blade_angle;
        }
    }

    #[test]
    fn odd_blade_count_lies_between_families() {
        let mut diagnostics = Diagnostics::default();
        let q = query(1.0, 0.15);
        let two = interpolate(2, &q, &mut diagnostics);
        let three = interpolate(3, &q, &mut diagnostics);
        let four = interpolate(4, &q, &mut diagnostics);

        assert!(three.blade_angle < two.blade_angle);
        assert!(three.blade_angle > four.blade_angle);
    }

    #[test]
    fn many_blades_use_eight_blade_family() {
        let q = query(1.0, 0.15);
        let mut diagnostics = Diagnostics::default();
        let eight = interpolate(8, &q, &mut Diagnostics::default());
        let ten = interpolate(10, &q, &mut diagnostics);

        assert_relative_eq!(ten.blade_angle, eight.blade_angle);
        assert_relative_eq!(ten.thrust_coefficient, eight.thrust_coefficient);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::Domain(DomainWarning {
                table: ChartTable::BladeCount,
                extrapolation: Extrapolation::Above,
            })]
        );
    }

    #[test]
    fn thrust_coefficient_is_never_negative() {
        for num_blades in [2, 3, 4, 6, 8] {
            for &advance_ratio in &STATIONS {
                let mut diagnostics = Diagnostics::default();
                let point = interpolate(num_blades, &query(advance_ratio, 0.0), &mut diagnostics);
                assert!(point.thrust_coefficient >= 0.0);

                let floored = diagnostics
                    .into_vec()
                    .contains(&Diagnostic::Degeneracy(Degeneracy::NegativeThrustCoefficient));
                assert_eq!(floored, point.thrust_coefficient == 0.0);
            }
        }
    }

    #[test]
    fn static_branch_blends_thrust_correction() {
        let activity = ActivityFactor {
            power_static: 1.0,
            power_dynamic: 1.0,
            thrust_static: 0.8,
            thrust_dynamic: 0.9,
        };
        assert_relative_eq!(activity.thrust(0.0), 0.8);
        assert_relative_eq!(activity.thrust(0.25), 0.85);
        assert_relative_eq!(activity.thrust(0.5), 0.9);
        assert_relative_eq!(activity.thrust(2.0), 0.9);
    }
}
