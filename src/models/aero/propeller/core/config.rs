use super::ConfigurationError;

/// How the installation loss factor is obtained for every node of an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstallationLossMode {
    /// Derived from the nacelle blockage chart.
    ///
    /// Requires [`PropellerGeometry::nacelle_diameter`](super::PropellerGeometry).
    #[default]
    Computed,

    /// Supplied by the caller on each [`FlightCondition`](super::FlightCondition).
    Supplied,
}

/// Options fixed for the life of a propeller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropellerConfig {
    /// Number of blades.
    ///
    /// Even counts up to eight read their own chart family. Odd counts are
    /// interpolated between families, and counts above eight use the
    /// eight-blade charts.
    pub num_blades: u32,

    /// Source of the installation loss factor.
    pub installation_loss: InstallationLossMode,

    /// Whether the caller generates flight-idle nodes.
    ///
    /// Carried for the mission driver; it does not change any output.
    pub generate_flight_idle: bool,

    /// Whether per-node diagnostics are logged at `warn` level.
    ///
    /// Diagnostics are always returned with each [`PerformancePoint`](super::PerformancePoint);
    /// when this is off they are only logged at `trace` level.
    pub report_diagnostics: bool,
}

impl Default for PropellerConfig {
    fn default() -> Self {
        Self {
            num_blades: 4,
            installation_loss: InstallationLossMode::Computed,
            generate_flight_idle: false,
            report_diagnostics: false,
        }
    }
}

impl PropellerConfig {
    /// Checks the options that can be rejected before any node is seen.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooFewBlades`] for fewer than two blades.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.num_blades < 2 {
            return Err(ConfigurationError::TooFewBlades {
                num_blades: self.num_blades,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PropellerConfig::default();
        assert_eq!(config.num_blades, 4);
        assert_eq!(config.installation_loss, InstallationLossMode::Computed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_single_blade() {
        let config = PropellerConfig {
            num_blades: 1,
            ..PropellerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::TooFewBlades { num_blades: 1 })
        );
    }
}
