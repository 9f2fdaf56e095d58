//! Output records for propeller evaluations.

use std::fmt;

use uom::si::{
    angle::degree,
    f64::{Angle, Force},
    force::pound_force,
};

use crate::support::{
    dual::Scalar,
    interp::{Extrapolation, Lookup},
};

/// Performance of the propeller at one node.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformancePoint {
    /// Thrust coefficient read from the charts.
    pub thrust_coefficient: f64,

    /// Compressibility (tip-loss) factor in `(0, 1]`.
    pub compressibility_factor: f64,

    /// Thrust coefficient after the compressibility factor.
    pub corrected_thrust_coefficient: f64,

    /// Three-quarter span blade angle.
    pub blade_angle: Angle,

    /// Installed thrust.
    pub thrust: Force,

    /// Free-air propeller efficiency.
    pub efficiency: f64,

    /// Installation loss factor in `[0, 1)`.
    pub installation_loss_factor: f64,

    /// Efficiency after installation losses.
    pub installed_efficiency: f64,

    /// Advance ratio the charts were read at.
    pub advance_ratio: f64,

    /// Power coefficient before chart corrections.
    pub power_coefficient: f64,

    /// Helical tip Mach number.
    pub helical_tip_mach: f64,

    /// Non-fatal conditions met while evaluating this node.
    pub diagnostics: Vec<Diagnostic>,
}

/// A non-fatal condition resolved during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A chart was queried outside its tabulated range and clamped.
    Domain(DomainWarning),

    /// A singular quantity was replaced by a defined value.
    Degeneracy(Degeneracy),
}

/// A chart query that fell outside the tabulated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainWarning {
    /// The chart or limit that was exceeded.
    pub table: ChartTable,

    /// Which side of the range the query fell on.
    pub extrapolation: Extrapolation,
}

/// Charts and limits that can report a [`DomainWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartTable {
    ActivityFactor,
    AdvanceRatio,
    BladeCount,
    BladeAngle,
    LiftPowerCorrection,
    LiftThrustCorrection,
    CriticalMach,
    CompressibilityLoss,
    Blockage,
    /// Commanded tip speed above the allowed tip speed.
    TipSpeedLimit,
}

/// Singular conditions with a defined substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// Velocity was raised to a small positive floor.
    VelocityFloor,

    /// Power coefficient was too small to divide by; efficiency is zero.
    ZeroPowerCoefficient,

    /// The charts read a negative thrust coefficient; it was set to zero.
    NegativeThrustCoefficient,

    /// Efficiency came out above one and was capped.
    EfficiencyAboveOne,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(DomainWarning {
                table,
                extrapolation,
            }) => {
                let side = match extrapolation {
                    Extrapolation::Below => "below",
                    Extrapolation::Above => "above",
                };
                write!(f, "{table:?} queried {side} its range and clamped")
            }
            Self::Degeneracy(Degeneracy::VelocityFloor) => {
                f.write_str("velocity raised to the static floor")
            }
            Self::Degeneracy(Degeneracy::ZeroPowerCoefficient) => {
                f.write_str("power coefficient is zero, efficiency set to zero")
            }
            Self::Degeneracy(Degeneracy::NegativeThrustCoefficient) => {
                f.write_str("negative thrust coefficient set to zero")
            }
            Self::Degeneracy(Degeneracy::EfficiencyAboveOne) => {
                f.write_str("efficiency above one capped at one")
            }
        }
    }
}

/// Collects the diagnostics of one node without duplicates.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        if !self.0.contains(&diagnostic) {
            self.0.push(diagnostic);
        }
    }

    pub(crate) fn flag(&mut self, table: ChartTable, extrapolation: Option<Extrapolation>) {
        if let Some(extrapolation) = extrapolation {
            self.push(Diagnostic::Domain(DomainWarning {
                table,
                extrapolation,
            }));
        }
    }

    /// Records every clamp of `lookup` against `table` and returns its value.
    pub(crate) fn record<S>(&mut self, table: ChartTable, lookup: Lookup<S>) -> S {
        for extrapolation in lookup.clamps() {
            self.flag(table, Some(extrapolation));
        }
        lookup.value
    }

    pub(crate) fn merge(&mut self, other: Diagnostics) {
        for diagnostic in other.0 {
            self.push(diagnostic);
        }
    }

    pub(crate) fn degenerate(&mut self, degeneracy: Degeneracy) {
        self.push(Diagnostic::Degeneracy(degeneracy));
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

/// Pipeline outputs of one node in chart units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeOutputs<S> {
    pub(crate) thrust_coefficient: S,
    pub(crate) compressibility_factor: S,
    pub(crate) corrected_thrust_coefficient: S,
    /// Degrees.
    pub(crate) blade_angle: S,
    /// Pounds force.
    pub(crate) thrust: S,
    pub(crate) efficiency: S,
    pub(crate) installation_loss_factor: S,
    pub(crate) installed_efficiency: S,
    pub(crate) advance_ratio: S,
    pub(crate) power_coefficient: S,
    pub(crate) helical_tip_mach: S,
}

impl<S: Scalar> NodeOutputs<S> {
    pub(crate) fn to_point(&self, diagnostics: Vec<Diagnostic>) -> PerformancePoint {
        PerformancePoint {
            thrust_coefficient: self.thrust_coefficient.re(),
            compressibility_factor: self.compressibility_factor.re(),
            corrected_thrust_coefficient: self.corrected_thrust_coefficient.re(),
            blade_angle: Angle::new::<degree>(self.blade_angle.re()),
            thrust: Force::new::<pound_force>(self.thrust.re()),
            efficiency: self.efficiency.re(),
            installation_loss_factor: self.installation_loss_factor.re(),
            installed_efficiency: self.installed_efficiency.re(),
            advance_ratio: self.advance_ratio.re(),
            power_coefficient: self.power_coefficient.re(),
            helical_tip_mach: self.helical_tip_mach.re(),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_recorded_once() {
        let mut diagnostics = Diagnostics::default();
        let clamped = Lookup {
            value: 1.0,
            extrapolation: [Some(Extrapolation::Above), None],
        };

        assert_eq!(diagnostics.record(ChartTable::Blockage, clamped), 1.0);
        diagnostics.record(ChartTable::Blockage, clamped);
        diagnostics.record(
            ChartTable::CriticalMach,
            Lookup {
                value: 0.8,
                extrapolation: [None, None],
            },
        );
        diagnostics.degenerate(Degeneracy::VelocityFloor);
        diagnostics.degenerate(Degeneracy::VelocityFloor);

        assert_eq!(
            diagnostics.into_vec(),
            vec![
                Diagnostic::Domain(DomainWarning {
                    table: ChartTable::Blockage,
                    extrapolation: Extrapolation::Above,
                }),
                Diagnostic::Degeneracy(Degeneracy::VelocityFloor),
            ]
        );
    }

    #[test]
    fn records_each_clamped_axis() {
        let mut diagnostics = Diagnostics::default();
        let lookup = Lookup {
            value: 0.7,
            extrapolation: [Some(Extrapolation::Below), Some(Extrapolation::Above)],
        };

        diagnostics.record(ChartTable::CriticalMach, lookup);

        assert_eq!(
            diagnostics.into_vec(),
            vec![
                Diagnostic::Domain(DomainWarning {
                    table: ChartTable::CriticalMach,
                    extrapolation: Extrapolation::Below,
                }),
                Diagnostic::Domain(DomainWarning {
                    table: ChartTable::CriticalMach,
                    extrapolation: Extrapolation::Above,
                }),
            ]
        );
    }

    #[test]
    fn display_names_table_and_side() {
        let warning = Diagnostic::Domain(DomainWarning {
            table: ChartTable::ActivityFactor,
            extrapolation: Extrapolation::Below,
        });
        assert_eq!(
            warning.to_string(),
            "ActivityFactor queried below its range and clamped"
        );
    }
}
