use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalUpperOpen,
};
use uom::si::{
    f64::{Length, MassDensity, Power, Ratio, ThermodynamicTemperature, Velocity},
    length::foot,
    mass_density::slug_per_cubic_foot,
    power::horsepower,
    ratio::ratio,
    thermodynamic_temperature::degree_rankine,
    velocity::foot_per_second,
};

use super::{ConfigurationError, InstallationLossMode, Parameter};

/// Propeller design parameters shared by the nodes of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropellerGeometry {
    /// Propeller diameter.
    pub diameter: Length,

    /// Blade activity factor.
    ///
    /// The charts cover 80 to 200; values outside are clamped.
    pub activity_factor: f64,

    /// Integrated design lift coefficient.
    ///
    /// The charts cover 0.3 to 0.8; values outside are clamped.
    pub integrated_lift_coefficient: f64,

    /// Nacelle diameter, required when the installation loss is computed.
    pub nacelle_diameter: Option<Length>,

    /// Maximum allowable tip speed, if the rotor has one.
    pub max_tip_speed: Option<Velocity>,
}

/// Operating point of one evaluation node.
///
/// Atmospheric properties and Mach number come from upstream models and are
/// taken as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    /// Pressure altitude, carried for diagnostics.
    pub altitude: Length,

    /// True airspeed.
    pub velocity: Velocity,

    /// Ambient density.
    pub density: MassDensity,

    /// Ambient static temperature.
    pub temperature: ThermodynamicTemperature,

    /// Flight Mach number.
    pub mach: Ratio,

    /// Commanded propeller tip speed.
    pub tip_speed: Velocity,

    /// Shaft power delivered to the propeller.
    pub shaft_power: Power,

    /// Corrected rotor speed as a fraction of its design value.
    pub percent_corrected_rpm: Ratio,

    /// Installation loss factor, read only in [`InstallationLossMode::Supplied`].
    pub installation_loss_factor: Option<Constrained<f64, UnitIntervalUpperOpen>>,
}

/// Continuous inputs of one node in chart units.
///
/// Lengths are in ft, speeds in ft/s, power in hp, density in slug/ft³ and
/// temperature in °R.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeInputs<S> {
    pub(crate) diameter: S,
    pub(crate) activity_factor: S,
    pub(crate) lift_coefficient: S,
    pub(crate) nacelle_diameter: S,
    pub(crate) velocity: S,
    pub(crate) tip_speed: S,
    pub(crate) shaft_power: S,
    pub(crate) density: S,
    pub(crate) temperature: S,
    pub(crate) mach: S,
    pub(crate) installation_loss: S,
}

/// A validated node ready for evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) index: usize,
    /// Altitude in ft.
    pub(crate) altitude: f64,
    /// Allowed tip speed in ft/s, if the rotor is limited.
    pub(crate) tip_speed_limit: Option<f64>,
    pub(crate) inputs: NodeInputs<f64>,
}

impl Node {
    /// Validates one node and converts it to chart units.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if an input is out of bounds or the
    /// installation loss mode lacks the input it needs.
    pub(crate) fn new(
        geometry: &PropellerGeometry,
        condition: &FlightCondition,
        mode: InstallationLossMode,
        index: usize,
    ) -> Result<Self, ConfigurationError> {
        let (nacelle_diameter, installation_loss) = match mode {
            InstallationLossMode::Computed => {
                let nacelle = geometry
                    .nacelle_diameter
                    .ok_or(ConfigurationError::MissingNacelleDiameter)?;
                let nacelle = check::<NonNegative>(Parameter::NacelleDiameter, nacelle.get::<foot>())?;
                (nacelle, 0.0)
            }
            InstallationLossMode::Supplied => {
                let loss = condition
                    .installation_loss_factor
                    .ok_or(ConfigurationError::MissingInstallationLossFactor { node: index })?;
                let nacelle = geometry.nacelle_diameter.map_or(0.0, |d| d.get::<foot>());
                (nacelle, loss.into_inner())
            }
        };

        let tip_speed_limit = match geometry.max_tip_speed {
            Some(max) => {
                let max = check::<StrictlyPositive>(
                    Parameter::MaxTipSpeed,
                    max.get::<foot_per_second>(),
                )?;
                let fraction = check::<NonNegative>(
                    Parameter::PercentCorrectedRpm,
                    condition.percent_corrected_rpm.get::<ratio>(),
                )?;
                Some(max * fraction)
            }
            None => None,
        };

        let inputs = NodeInputs {
            diameter: check::<StrictlyPositive>(Parameter::Diameter, geometry.diameter.get::<foot>())?,
            activity_factor: check::<StrictlyPositive>(
                Parameter::ActivityFactor,
                geometry.activity_factor,
            )?,
            lift_coefficient: check::<StrictlyPositive>(
                Parameter::IntegratedLiftCoefficient,
                geometry.integrated_lift_coefficient,
            )?,
            nacelle_diameter,
            velocity: check::<NonNegative>(
                Parameter::Velocity,
                condition.velocity.get::<foot_per_second>(),
            )?,
            tip_speed: check::<StrictlyPositive>(
                Parameter::TipSpeed,
                condition.tip_speed.get::<foot_per_second>(),
            )?,
            shaft_power: check::<NonNegative>(
                Parameter::ShaftPower,
                condition.shaft_power.get::<horsepower>(),
            )?,
            density: check::<StrictlyPositive>(
                Parameter::Density,
                condition.density.get::<slug_per_cubic_foot>(),
            )?,
            temperature: check::<StrictlyPositive>(
                Parameter::Temperature,
                condition.temperature.get::<degree_rankine>(),
            )?,
            mach: check::<NonNegative>(Parameter::Mach, condition.mach.get::<ratio>())?,
            installation_loss,
        };

        Ok(Self {
            index,
            altitude: condition.altitude.get::<foot>(),
            tip_speed_limit,
            inputs,
        })
    }
}

/// Applies constraint `C`, naming `parameter` on failure.
fn check<C: Constraint<f64>>(parameter: Parameter, value: f64) -> Result<f64, ConfigurationError> {
    Constrained::<f64, C>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source: ConstraintError| ConfigurationError::InvalidParameter { parameter, source })
}
