use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that reject an evaluation before any output is produced.
///
/// A batch stops at the first node that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The blade count cannot select a chart family.
    #[error("a propeller needs at least 2 blades, got {num_blades}")]
    TooFewBlades {
        /// Configured blade count.
        num_blades: u32,
    },

    /// An input violates its physical bounds.
    #[error("invalid {parameter}")]
    InvalidParameter {
        /// The offending input.
        parameter: Parameter,

        /// The violated bound.
        #[source]
        source: ConstraintError,
    },

    /// Computed installation loss needs the nacelle diameter.
    #[error("computed installation loss requires a nacelle diameter")]
    MissingNacelleDiameter,

    /// Supplied installation loss mode found a node without a loss factor.
    #[error("supplied installation loss mode requires a loss factor at node {node}")]
    MissingInstallationLossFactor {
        /// Index of the node within the batch.
        node: usize,
    },
}

/// Inputs checked at the evaluation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Diameter,
    ActivityFactor,
    IntegratedLiftCoefficient,
    NacelleDiameter,
    MaxTipSpeed,
    Velocity,
    Density,
    Temperature,
    Mach,
    TipSpeed,
    ShaftPower,
    PercentCorrectedRpm,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Diameter => "diameter",
            Self::ActivityFactor => "activity factor",
            Self::IntegratedLiftCoefficient => "integrated lift coefficient",
            Self::NacelleDiameter => "nacelle diameter",
            Self::MaxTipSpeed => "maximum tip speed",
            Self::Velocity => "velocity",
            Self::Density => "density",
            Self::Temperature => "temperature",
            Self::Mach => "Mach number",
            Self::TipSpeed => "tip speed",
            Self::ShaftPower => "shaft power",
            Self::PercentCorrectedRpm => "percent corrected rpm",
        };
        f.write_str(name)
    }
}
