//! Installation loss from nacelle blockage.

use crate::support::{dual::Scalar, interp::Extrapolation};

use super::{ChartTable, Diagnostics, InstallationLossMode, NodeInputs, tables::BLOCKAGE};

/// Largest nacelle-to-disk area ratio on the blockage chart.
const MAX_AREA_RATIO: f64 = 0.5;

/// Largest equivalent advance ratio on the blockage chart.
const MAX_EQUIVALENT_ADVANCE_RATIO: f64 = 5.0;

/// Slope of the equivalent advance ratio with nacelle area ratio.
const BLOCKAGE_SLOPE: f64 = 0.254;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Installed<S> {
    /// Loss factor in `[0, 1)`.
    pub(crate) loss_factor: S,
    pub(crate) efficiency: S,
}

/// Obtains the installation loss factor and applies it to the efficiency.
pub(crate) fn install<S: Scalar>(
    mode: InstallationLossMode,
    inputs: &NodeInputs<S>,
    advance_ratio: S,
    efficiency: S,
    diagnostics: &mut Diagnostics,
) -> Installed<S> {
    let loss_factor = match mode {
        InstallationLossMode::Computed => loss_factor(
            inputs.nacelle_diameter,
            inputs.diameter,
            advance_ratio,
            diagnostics,
        ),
        InstallationLossMode::Supplied => inputs.installation_loss,
    };

    Installed {
        loss_factor,
        efficiency: efficiency * (S::one() - loss_factor),
    }
}

/// Loss factor from the nacelle blockage chart.
///
/// The area ratio `(D_nac / D)²` and the equivalent advance ratio
/// `(1 − 0.254 · area) · J` are clamped to the chart before it is read.
pub(crate) fn loss_factor<S: Scalar>(
    nacelle_diameter: S,
    diameter: S,
    advance_ratio: S,
    diagnostics: &mut Diagnostics,
) -> S {
    let ratio = nacelle_diameter / diameter;
    let area = clamp_above(ratio * ratio, MAX_AREA_RATIO, diagnostics);
    let equivalent_advance_ratio = clamp_above(
        (S::one() - area * BLOCKAGE_SLOPE) * advance_ratio,
        MAX_EQUIVALENT_ADVANCE_RATIO,
        diagnostics,
    );

    let blockage = diagnostics.record(
        ChartTable::Blockage,
        BLOCKAGE.eval(area, equivalent_advance_ratio),
    );
    (S::one() - blockage).at_least(0.0)
}

fn clamp_above<S: Scalar>(value: S, ceiling: f64, diagnostics: &mut Diagnostics) -> S {
    if value.re() > ceiling {
        diagnostics.flag(ChartTable::Blockage, Some(Extrapolation::Above));
    }
    value.at_most(ceiling)
}
