//! Hamilton Standard performance charts.
//!
//! The tables are reconstructed rather than digitized: each chart is a
//! smooth family, monotone in blade angle, calibrated so the model
//! reproduces reference evaluations of the published charts. Treat readings
//! away from those points as approximations of the published figures.
//!
//! Every chart is a `static` built from literal data, so the tables exist for
//! the life of the process and are shared read-only by all evaluations.
//!
//! Units follow the charts: blade angles in degrees, everything else
//! dimensionless.

mod blockage;
mod compressibility;
mod corrections;
mod eight_blades;
mod four_blades;
mod six_blades;
mod two_blades;

pub(crate) use blockage::BLOCKAGE;
pub(crate) use compressibility::{CRITICAL_MACH, MACH_LOSS};
pub(crate) use corrections::{ACTIVITY_FACTOR, LIFT_POWER, LIFT_THRUST};

use crate::support::interp::Curve;

/// Advance ratios at which each blade family is tabulated.
pub(crate) const ADVANCE_RATIOS: [f64; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0];

/// Blade counts with a tabulated family, in ascending order.
pub(crate) const BLADE_COUNTS: [f64; 4] = [2.0, 4.0, 6.0, 8.0];

/// Tabulated blade families, matching [`BLADE_COUNTS`].
pub(crate) static FAMILIES: [&BladeFamily; 4] = [
    &two_blades::TWO_BLADES,
    &four_blades::FOUR_BLADES,
    &six_blades::SIX_BLADES,
    &eight_blades::EIGHT_BLADES,
];

/// Three-quarter span blade angles tabulated at each advance ratio station.
const BLADE_ANGLES: [&[f64]; 7] = [
    &[
        0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 42.0,
        45.0, 48.0, 51.0, 54.0, 57.0, 60.0, 63.0, 66.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0,
        87.0, 90.0,
    ],
    &[
        6.0, 9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0,
        51.0, 54.0, 57.0, 60.0, 63.0, 66.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0, 87.0, 90.0,
    ],
    &[
        15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 51.0, 54.0,
        57.0, 60.0, 63.0, 66.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0, 87.0, 90.0,
    ],
    &[
        24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 51.0, 54.0, 57.0, 60.0, 63.0,
        66.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0, 87.0, 90.0,
    ],
    &[
        30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 51.0, 54.0, 57.0, 60.0, 63.0, 66.0, 69.0,
        72.0, 75.0, 78.0, 81.0, 84.0, 87.0, 90.0,
    ],
    &[
        42.0, 45.0, 48.0, 51.0, 54.0, 57.0, 60.0, 63.0, 66.0, 69.0, 72.0, 75.0, 78.0, 81.0,
        84.0, 87.0, 90.0,
    ],
    &[
        57.0, 60.0, 63.0, 66.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0, 87.0, 90.0,
    ],
];

/// Power and thrust coefficient charts for one blade count.
#[derive(Debug)]
pub(crate) struct BladeFamily {
    pub(crate) blades: u32,
    /// One station per entry of [`ADVANCE_RATIOS`].
    pub(crate) stations: [Station; 7],
}

/// Power and thrust coefficients against blade angle at one advance ratio.
///
/// Power coefficient is strictly increasing with blade angle, so the power
/// curve can be read backwards to find the blade angle that absorbs a given
/// power.
#[derive(Debug)]
pub(crate) struct Station {
    pub(crate) power: Curve<'static>,
    pub(crate) thrust: Curve<'static>,
}

impl Station {
    const fn new(
        blade_angles: &'static [f64],
        power: &'static [f64],
        thrust: &'static [f64],
    ) -> Self {
        Self {
            power: Curve::new(blade_angles, power),
            thrust: Curve::new(blade_angles, thrust),
        }
    }
}

/// Activity factor multipliers.
///
/// The static rows apply at zero advance ratio and the dynamic rows in
/// forward flight.
#[derive(Debug)]
pub(crate) struct ActivityFactorCorrections {
    pub(crate) power_static: Curve<'static>,
    pub(crate) power_dynamic: Curve<'static>,
    pub(crate) thrust_static: Curve<'static>,
    pub(crate) thrust_dynamic: Curve<'static>,
}
