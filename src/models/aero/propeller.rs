//! Hamilton Standard propeller performance model.
//!
//! [`PropellerPerformance`] evaluates installed thrust and efficiency for
//! one node or a batch of nodes. A batch validates every node before any is
//! evaluated, then evaluates nodes in parallel; results keep the input order.
//!
//! The [`twine_core::Model`] implementation is a thin adapter over the same
//! evaluation. The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_propeller::models::aero::propeller::{
//!     FlightCondition, PropellerConfig, PropellerGeometry, PropellerPerformance,
//! };
//! use uom::si::{
//!     f64::{Length, MassDensity, Power, Ratio, ThermodynamicTemperature, Velocity},
//!     force::pound_force,
//!     length::foot,
//!     mass_density::slug_per_cubic_foot,
//!     power::horsepower,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_rankine,
//!     velocity::foot_per_second,
//! };
//!
//! let propeller = PropellerPerformance::new(PropellerConfig::default()).unwrap();
//!
//! let geometry = PropellerGeometry {
//!     diameter: Length::new::<foot>(10.5),
//!     activity_factor: 114.0,
//!     integrated_lift_coefficient: 0.5,
//!     nacelle_diameter: Some(Length::new::<foot>(2.8875)),
//!     max_tip_speed: None,
//! };
//! let climb = FlightCondition {
//!     altitude: Length::new::<foot>(0.0),
//!     velocity: Velocity::new::<foot_per_second>(211.0),
//!     density: MassDensity::new::<slug_per_cubic_foot>(0.002_376_9),
//!     temperature: ThermodynamicTemperature::new::<degree_rankine>(518.67),
//!     mach: Ratio::new::<ratio>(0.189),
//!     tip_speed: Velocity::new::<foot_per_second>(800.0),
//!     shaft_power: Power::new::<horsepower>(1850.0),
//!     percent_corrected_rpm: Ratio::new::<ratio>(1.0),
//!     installation_loss_factor: None,
//! };
//!
//! let point = propeller.evaluate(&geometry, &climb).unwrap();
//! assert!(point.thrust.get::<pound_force>() > 3000.0);
//! assert!(point.installed_efficiency < point.efficiency);
//! ```

pub(crate) mod core;

use rayon::prelude::*;
use tracing::debug;
use twine_core::Model;

use self::core::Node;

pub use self::core::{
    ChartTable, ConfigurationError, Degeneracy, Diagnostic, DomainWarning, FlightCondition,
    INPUTS, Input, InstallationLossMode, Jacobian, OUTPUTS, Output, Parameter, PerformancePoint,
    PropellerConfig, PropellerGeometry,
};

/// Propeller performance evaluator with a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropellerPerformance {
    config: PropellerConfig,
}

impl PropellerPerformance {
    /// Creates an evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooFewBlades`] if the configuration
    /// cannot select a chart family.
    pub fn new(config: PropellerConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PropellerConfig {
        &self.config
    }

    /// Evaluates a single flight condition.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if an input violates its bounds or
    /// the installation loss mode lacks the input it needs.
    pub fn evaluate(
        &self,
        geometry: &PropellerGeometry,
        condition: &FlightCondition,
    ) -> Result<PerformancePoint, ConfigurationError> {
        let node = self.node(geometry, condition, 0)?;
        Ok(self::core::evaluate(&self.config, &node))
    }

    /// Evaluates a single flight condition with partial derivatives.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn evaluate_with_partials(
        &self,
        geometry: &PropellerGeometry,
        condition: &FlightCondition,
    ) -> Result<(PerformancePoint, Jacobian), ConfigurationError> {
        let node = self.node(geometry, condition, 0)?;
        Ok(self::core::evaluate_with_partials(&self.config, &node))
    }

    /// Evaluates every condition, returning points in input order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first node that fails validation. No node is
    /// evaluated in that case.
    pub fn evaluate_batch(
        &self,
        geometry: &PropellerGeometry,
        conditions: &[FlightCondition],
    ) -> Result<Vec<PerformancePoint>, ConfigurationError> {
        let nodes = self.nodes(geometry, conditions)?;
        Ok(nodes
            .par_iter()
            .map(|node| self::core::evaluate(&self.config, node))
            .collect())
    }

    /// Evaluates every condition with partial derivatives.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate_batch`](Self::evaluate_batch).
    pub fn evaluate_batch_with_partials(
        &self,
        geometry: &PropellerGeometry,
        conditions: &[FlightCondition],
    ) -> Result<Vec<(PerformancePoint, Jacobian)>, ConfigurationError> {
        let nodes = self.nodes(geometry, conditions)?;
        Ok(nodes
            .par_iter()
            .map(|node| self::core::evaluate_with_partials(&self.config, node))
            .collect())
    }

    fn node(
        &self,
        geometry: &PropellerGeometry,
        condition: &FlightCondition,
        index: usize,
    ) -> Result<Node, ConfigurationError> {
        Node::new(geometry, condition, self.config.installation_loss, index)
    }

    fn nodes(
        &self,
        geometry: &PropellerGeometry,
        conditions: &[FlightCondition],
    ) -> Result<Vec<Node>, ConfigurationError> {
        debug!(
            nodes = conditions.len(),
            num_blades = self.config.num_blades,
            "evaluating propeller batch"
        );
        conditions
            .iter()
            .enumerate()
            .map(|(index, condition)| self.node(geometry, condition, index))
            .collect()
    }
}

/// Input to the [`Model`] adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropellerInput {
    pub geometry: PropellerGeometry,
    pub condition: FlightCondition,
}

impl Model for PropellerPerformance {
    type Input = PropellerInput;
    type Output = PerformancePoint;
    type Error = ConfigurationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(&input.geometry, &input.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, force::pound_force, length::foot};

    use super::core::test_support::{CASES, condition_for, config_for, geometry, geometry_for};

    fn propeller() -> PropellerPerformance {
        PropellerPerformance::new(PropellerConfig::default()).unwrap()
    }

    #[test]
    fn rejects_single_blade_configuration() {
        let config = PropellerConfig {
            num_blades: 1,
            ..PropellerConfig::default()
        };
        assert_eq!(
            PropellerPerformance::new(config),
            Err(ConfigurationError::TooFewBlades { num_blades: 1 })
        );
    }

    #[test]
    fn batch_matches_single_evaluations() {
        let geometry = geometry();
        let conditions: Vec<_> = CASES[..3].iter().map(condition_for).collect();

        let batch = propeller().evaluate_batch(&geometry, &conditions).unwrap();

        assert_eq!(batch.len(), conditions.len());
        for (point, condition) in batch.iter().zip(&conditions) {
            assert_eq!(point, &propeller().evaluate(&geometry, condition).unwrap());
        }
    }

    #[test]
    fn batch_with_partials_matches_single_evaluations() {
        let geometry = geometry();
        let conditions: Vec<_> = CASES[..3].iter().map(condition_for).collect();

        let batch = propeller()
            .evaluate_batch_with_partials(&geometry, &conditions)
            .unwrap();

        for ((point, jacobian), condition) in batch.iter().zip(&conditions) {
            let (single, single_jacobian) =
                propeller().evaluate_with_partials(&geometry, condition).unwrap();
            assert_eq!(point, &single);
            assert_eq!(jacobian, &single_jacobian);
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let points = propeller().evaluate_batch(&geometry(), &[]).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn batch_stops_at_first_invalid_node() {
        let config = config_for(&CASES[3]);
        let propeller = PropellerPerformance::new(config).unwrap();
        let geometry = geometry_for(&CASES[3]);

        let mut conditions: Vec<_> = CASES[3..6].iter().map(condition_for).collect();
        conditions[1].installation_loss_factor = None;
        conditions[2].installation_loss_factor = None;

        assert_eq!(
            propeller.evaluate_batch(&geometry, &conditions),
            Err(ConfigurationError::MissingInstallationLossFactor { node: 1 })
        );
    }

    #[test]
    fn computed_loss_requires_nacelle_diameter() {
        let geometry = PropellerGeometry {
            nacelle_diameter: None,
            ..geometry()
        };
        assert_eq!(
            propeller().evaluate(&geometry, &condition_for(&CASES[1])),
            Err(ConfigurationError::MissingNacelleDiameter)
        );
    }

    #[test]
    fn rejects_zero_diameter() {
        let geometry = PropellerGeometry {
            diameter: Length::new::<foot>(0.0),
            ..geometry()
        };
        let error = propeller()
            .evaluate(&geometry, &condition_for(&CASES[1]))
            .unwrap_err();
        assert!(matches!(
            error,
            ConfigurationError::InvalidParameter {
                parameter: Parameter::Diameter,
                ..
            }
        ));
    }

    #[test]
    fn model_call_delegates_to_evaluate() {
        let input = PropellerInput {
            geometry: geometry(),
            condition: condition_for(&CASES[1]),
        };

        let point = propeller().call(&input).unwrap();

        assert_eq!(
            point,
            propeller().evaluate(&input.geometry, &input.condition).unwrap()
        );
        assert_relative_eq!(
            point.thrust.get::<pound_force>(),
            CASES[1].expected.thrust,
            max_relative = 5e-3
        );
    }

    mod proptests {
        use super::*;

        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nodes_are_evaluated_independently(
                order in prop::collection::vec(0_usize..3, 0..12),
            ) {
                let geometry = geometry();
                let conditions: Vec<_> = order.iter().map(|&i| condition_for(&CASES[i])).collect();

                let batch = propeller().evaluate_batch(&geometry, &conditions).unwrap();

                prop_assert_eq!(batch.len(), order.len());
                for (point, condition) in batch.iter().zip(&conditions) {
                    prop_assert_eq!(point, &propeller().evaluate(&geometry, condition).unwrap());
                }
            }
        }
    }
}
