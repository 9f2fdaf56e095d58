//! Hamilton Standard propeller performance.
//!
//! A node flows through the pipeline in fixed order:
//!
//! 1. normalize the flight condition into advance ratio, power coefficient
//!    and helical tip Mach number,
//! 2. read blade angle and thrust coefficient from the blade-angle charts,
//! 3. apply the compressibility correction,
//! 4. assemble dimensional thrust and efficiency,
//! 5. apply the installation loss.
//!
//! Every stage is generic over [`Scalar`], so the same code produces plain
//! values and, with [`Dual64`](crate::support::dual::Dual64) numbers, their
//! partial derivatives.

mod compressibility;
mod config;
mod derivatives;
mod error;
mod input;
mod installation;
mod map;
mod normalize;
mod results;
mod tables;
mod thrust;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{InstallationLossMode, PropellerConfig};
pub use derivatives::{INPUTS, Input, Jacobian, OUTPUTS, Output};
pub use error::{ConfigurationError, Parameter};
pub use input::{FlightCondition, PropellerGeometry};
pub use results::{ChartTable, Degeneracy, Diagnostic, DomainWarning, PerformancePoint};

pub(crate) use input::{Node, NodeInputs};
pub(crate) use results::{Diagnostics, NodeOutputs};

use tracing::{debug_span, trace, warn};

use crate::support::{dual::Scalar, interp::Extrapolation};

use map::MapQuery;

/// Evaluates one validated node.
pub(crate) fn evaluate(config: &PropellerConfig, node: &Node) -> PerformancePoint {
    let _span = debug_span!("propeller_node", node = node.index, altitude_ft = node.altitude)
        .entered();

    let (outputs, diagnostics) = run(config, node, &node.inputs);
    outputs.to_point(report(config, diagnostics))
}

/// Evaluates one validated node along with its partial derivatives.
pub(crate) fn evaluate_with_partials(
    config: &PropellerConfig,
    node: &Node,
) -> (PerformancePoint, Jacobian) {
    let _span = debug_span!("propeller_node", node = node.index, altitude_ft = node.altitude)
        .entered();

    let (outputs, diagnostics) = run(config, node, &node.inputs);
    let jacobian =
        Jacobian::from_columns(|input| run(config, node, &node.inputs.seeded(input)).0);
    (outputs.to_point(report(config, diagnostics)), jacobian)
}

/// Runs the pipeline on `inputs`, which are `node`'s inputs in scalar form.
fn run<S: Scalar>(
    config: &PropellerConfig,
    node: &Node,
    inputs: &NodeInputs<S>,
) -> (NodeOutputs<S>, Diagnostics) {
    let mut diagnostics = Diagnostics::default();

    if let Some(limit) = node.tip_speed_limit {
        if inputs.tip_speed.re() > limit {
            diagnostics.flag(ChartTable::TipSpeedLimit, Some(Extrapolation::Above));
        }
    }

    let groups = normalize::normalize(inputs, &mut diagnostics);

    let chart = map::interpolate(
        config.num_blades,
        &MapQuery {
            advance_ratio: groups.advance_ratio,
            power_coefficient: groups.power_coefficient,
            activity_factor: inputs.activity_factor,
            lift_coefficient: inputs.lift_coefficient,
        },
        &mut diagnostics,
    );

    let corrected = compressibility::correct(
        chart.thrust_coefficient,
        groups.helical_tip_mach,
        inputs.lift_coefficient,
        chart.blade_angle,
        &mut diagnostics,
    );

    let free_air = thrust::assemble(
        corrected.corrected_thrust_coefficient,
        inputs.density,
        inputs.tip_speed,
        inputs.diameter,
        groups.advance_ratio,
        groups.power_coefficient,
        &mut diagnostics,
    );

    let installed = installation::install(
        config.installation_loss,
        inputs,
        groups.advance_ratio,
        free_air.efficiency,
        &mut diagnostics,
    );

    let outputs = NodeOutputs {
        thrust_coefficient: chart.thrust_coefficient,
        compressibility_factor: corrected.factor,
        corrected_thrust_coefficient: corrected.corrected_thrust_coefficient,
        blade_angle: chart.blade_angle,
        thrust: free_air.thrust * (S::one() - installed.loss_factor),
        efficiency: free_air.efficiency,
        installation_loss_factor: installed.loss_factor,
        installed_efficiency: installed.efficiency,
        advance_ratio: groups.advance_ratio,
        power_coefficient: groups.power_coefficient,
        helical_tip_mach: groups.helical_tip_mach,
    };
    (outputs, diagnostics)
}

fn report(config: &PropellerConfig, diagnostics: Diagnostics) -> Vec<Diagnostic> {
    let diagnostics = diagnostics.into_vec();
    for diagnostic in &diagnostics {
        if config.report_diagnostics {
            warn!(%diagnostic, "propeller evaluation");
        } else {
            trace!(%diagnostic, "propeller evaluation");
        }
    }
    diagnostics
}
