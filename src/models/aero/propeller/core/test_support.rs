//! Regression scenarios and a simple atmosphere for tests.

use uom::si::{
    f64::{Length, MassDensity, Power, Ratio, ThermodynamicTemperature, Velocity},
    length::foot,
    mass_density::slug_per_cubic_foot,
    power::horsepower,
    ratio::ratio,
    thermodynamic_temperature::degree_rankine,
    velocity::foot_per_second,
};

use crate::support::constraint::UnitIntervalUpperOpen;

use super::{
    FlightCondition, InstallationLossMode, Node, NodeInputs, PropellerConfig, PropellerGeometry,
};

/// Sea-level standard temperature in °R.
const STANDARD_RANKINE: f64 = 518.67;

const SEA_LEVEL_DENSITY: f64 = 0.002_376_9;
const LAPSE_RATE: f64 = 0.003_566_16;
const DENSITY_EXPONENT: f64 = 4.255_879_7;
pub(crate) const FT_PER_S_PER_KNOT: f64 = 1.687_809_9;

/// Troposphere density (slug/ft³) and temperature (°R) at `altitude` ft.
pub(crate) fn atmosphere(altitude: f64) -> (f64, f64) {
    let temperature = STANDARD_RANKINE - LAPSE_RATE * altitude;
    let density = SEA_LEVEL_DENSITY * (temperature / STANDARD_RANKINE).powf(DENSITY_EXPONENT);
    (density, temperature)
}

/// Speed of sound in ft/s at `temperature` °R.
pub(crate) fn speed_of_sound(temperature: f64) -> f64 {
    (1.4 * 1716.49 * temperature).sqrt()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Expected {
    pub(crate) thrust_coefficient: f64,
    pub(crate) compressibility_factor: f64,
    pub(crate) blade_angle: f64,
    pub(crate) thrust: f64,
    pub(crate) efficiency: f64,
    pub(crate) installation_loss_factor: f64,
    pub(crate) installed_efficiency: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RegressionCase {
    pub(crate) num_blades: u32,
    pub(crate) diameter: f64,
    pub(crate) activity_factor: f64,
    pub(crate) lift_coefficient: f64,
    pub(crate) nacelle_diameter: f64,
    pub(crate) altitude: f64,
    pub(crate) knots: f64,
    pub(crate) tip_speed: f64,
    pub(crate) shaft_power: f64,
    /// `None` computes the installation loss.
    pub(crate) supplied_loss: Option<f64>,
    pub(crate) expected: Expected,
}

#[allow(clippy::too_many_arguments)]
const fn case(
    num_blades: u32,
    diameter: f64,
    activity_factor: f64,
    lift_coefficient: f64,
    nacelle_diameter: f64,
    condition: [f64; 4],
    supplied_loss: Option<f64>,
    expected: [f64; 7],
) -> RegressionCase {
    RegressionCase {
        num_blades,
        diameter,
        activity_factor,
        lift_coefficient,
        nacelle_diameter,
        altitude: condition[0],
        knots: condition[1],
        tip_speed: condition[2],
        shaft_power: condition[3],
        supplied_loss,
        expected: Expected {
            thrust_coefficient: expected[0],
            compressibility_factor: expected[1],
            blade_angle: expected[2],
            thrust: expected[3],
            efficiency: expected[4],
            installation_loss_factor: expected[5],
            installed_efficiency: expected[6],
        },
    }
}

/// Published check cases for the Hamilton Standard method.
///
/// Conditions are altitude (ft), airspeed (kt), tip speed (ft/s) and shaft
/// power (hp). Expected values are thrust coefficient, compressibility
/// factor, blade angle (deg), thrust (lbf), efficiency, installation loss
/// factor and installed efficiency.
#[rustfmt::skip]
pub(crate) const CASES: [RegressionCase; 12] = [
    case(4, 10.5, 114.0, 0.5, 2.8875, [0.0, 0.1, 800.0, 1850.0], None,
        [0.27651, 1.0, 25.17, 4634.8, 0.00078, 0.0133, 0.00077]),
    case(4, 10.5, 114.0, 0.5, 2.8875, [0.0, 125.0, 800.0, 1850.0], None,
        [0.20518, 1.0, 29.67, 3415.9, 0.72352, 0.02, 0.70904]),
    case(4, 10.5, 114.0, 0.5, 2.8875, [25_000.0, 300.0, 750.0, 900.0], None,
        [0.13093, 0.9976, 44.23, 841.5, 0.89202, 0.034, 0.86171]),
    case(4, 12.0, 150.0, 0.5, 2.8875, [10_000.0, 200.0, 750.0, 1000.0], Some(0.0),
        [0.10236, 1.0, 31.94, 1474.3, 0.90586, 0.0, 0.90586]),
    case(4, 12.0, 150.0, 0.5, 2.8875, [10_000.0, 200.0, 750.0, 1000.0], Some(0.05),
        [0.10236, 1.0, 31.94, 1400.6, 0.90586, 0.05, 0.86056]),
    case(4, 12.0, 150.0, 0.5, 2.8875, [0.0, 50.0, 785.0, 1250.0], Some(0.05),
        [0.19331, 1.0, 17.44, 3923.5, 0.50750, 0.05, 0.48213]),
    case(3, 12.0, 150.0, 0.5, 2.8875, [10_000.0, 200.0, 750.0, 1000.0], Some(0.0),
        [0.10189, 1.0, 33.43, 1467.6, 0.90172, 0.0, 0.90172]),
    case(3, 12.0, 150.0, 0.5, 2.8875, [10_000.0, 200.0, 750.0, 1000.0], Some(0.05),
        [0.10189, 1.0, 33.43, 1394.2, 0.90172, 0.05, 0.85664]),
    case(3, 12.0, 150.0, 0.5, 2.8875, [0.0, 50.0, 785.0, 1250.0], Some(0.05),
        [0.18123, 1.0, 20.08, 3678.3, 0.47579, 0.05, 0.45200]),
    case(4, 12.0, 150.0, 0.65, 2.4, [10_000.0, 200.0, 750.0, 900.0], None,
        [0.08523, 1.0, 30.28, 1210.4, 0.83809, 0.0140, 0.82635]),
    case(4, 12.0, 150.0, 0.65, 2.4, [10_000.0, 200.0, 750.0, 750.0], None,
        [0.06463, 1.0, 29.50, 917.8, 0.76259, 0.0140, 0.75190]),
    case(4, 12.0, 150.0, 0.65, 2.4, [10_000.0, 200.0, 750.0, 500.0], None,
        [0.02800, 1.0, 28.10, 397.7, 0.49565, 0.0140, 0.48871]),
];

pub(crate) fn config_for(case: &RegressionCase) -> PropellerConfig {
    PropellerConfig {
        num_blades: case.num_blades,
        installation_loss: if case.supplied_loss.is_some() {
            InstallationLossMode::Supplied
        } else {
            InstallationLossMode::Computed
        },
        ..PropellerConfig::default()
    }
}

pub(crate) fn geometry_for(case: &RegressionCase) -> PropellerGeometry {
    PropellerGeometry {
        diameter: Length::new::<foot>(case.diameter),
        activity_factor: case.activity_factor,
        integrated_lift_coefficient: case.lift_coefficient,
        nacelle_diameter: Some(Length::new::<foot>(case.nacelle_diameter)),
        max_tip_speed: None,
    }
}

pub(crate) fn condition_for(case: &RegressionCase) -> FlightCondition {
    let (density, temperature) = atmosphere(case.altitude);
    let velocity = case.knots * FT_PER_S_PER_KNOT;
    FlightCondition {
        altitude: Length::new::<foot>(case.altitude),
        velocity: Velocity::new::<foot_per_second>(velocity),
        density: MassDensity::new::<slug_per_cubic_foot>(density),
        temperature: ThermodynamicTemperature::new::<degree_rankine>(temperature),
        mach: Ratio::new::<ratio>(velocity / speed_of_sound(temperature)),
        tip_speed: Velocity::new::<foot_per_second>(case.tip_speed),
        shaft_power: Power::new::<horsepower>(case.shaft_power),
        percent_corrected_rpm: Ratio::new::<ratio>(1.0),
        installation_loss_factor: case
            .supplied_loss
            .map(|loss| UnitIntervalUpperOpen::new(loss).expect("loss factor in [0, 1)")),
    }
}

pub(crate) fn node_for(case: &RegressionCase, index: usize) -> Node {
    Node::new(
        &geometry_for(case),
        &condition_for(case),
        config_for(case).installation_loss,
        index,
    )
    .expect("regression cases are valid")
}

/// Chart-unit inputs of regression case `index`.
pub(crate) fn chart_inputs(index: usize) -> NodeInputs<f64> {
    node_for(&CASES[index], index).inputs
}

/// Geometry of the first three regression cases.
pub(crate) fn geometry() -> PropellerGeometry {
    geometry_for(&CASES[1])
}

/// Sea-level climb condition of the second regression case.
pub(crate) fn sea_level_condition() -> FlightCondition {
    condition_for(&CASES[1])
}
