//! Activity factor and integrated lift coefficient corrections.

use crate::support::interp::{Curve, Surface};

use super::ActivityFactorCorrections;

const ACTIVITY_FACTORS: [f64; 6] = [80.0, 100.0, 125.0, 150.0, 175.0, 200.0];

pub(crate) static ACTIVITY_FACTOR: ActivityFactorCorrections = ActivityFactorCorrections {
    power_static: Curve::new(&ACTIVITY_FACTORS, &[1.619, 1.365, 1.15, 1.0, 0.8885, 0.802]),
    power_dynamic: Curve::new(&ACTIVITY_FACTORS, &[1.748, 1.434, 1.176, 1.0, 0.872, 0.7744]),
    thrust_static: Curve::new(&ACTIVITY_FACTORS, &[0.4228, 0.5739, 0.779, 1.0, 1.235, 1.483]),
    thrust_dynamic: Curve::new(&ACTIVITY_FACTORS, &[0.5863, 0.7086, 0.8565, 1.0, 1.14, 1.277]),
};

const LIFT_COEFFICIENTS: [f64; 6] = [0.3, 0.4, 0.5, 0.6, 0.7, 0.8];

const POWER_COEFFICIENTS: [f64; 14] = [
    0.01, 0.02, 0.04, 0.06, 0.08, 0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.8,
];

const THRUST_COEFFICIENTS: [f64; 14] = [
    0.01, 0.02, 0.03, 0.04, 0.06, 0.08, 0.1, 0.12, 0.16, 0.2, 0.24, 0.28, 0.32, 0.4,
];

/// Power coefficient multiplier over (lift coefficient, power coefficient).
pub(crate) static LIFT_POWER: Surface<'static> = Surface::new(
    &LIFT_COEFFICIENTS,
    &POWER_COEFFICIENTS,
    &[
        &[
            1.175, 1.175, 1.175, 1.186, 1.198, 1.146, 1.081, 1.059, 1.021, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            1.087, 1.087, 1.087, 1.093, 1.099, 1.073, 1.041, 1.029, 1.01, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            0.5629, 0.5629, 0.5629, 0.5345, 0.506, 0.6352, 0.7972, 0.8526, 0.9484, 1.0, 1.0, 1.0,
            1.0, 1.0,
        ],
        &[
            0.3007, 0.3007, 0.3007, 0.2552, 0.2097, 0.4164, 0.6755, 0.7642, 0.9175, 1.0, 1.0, 1.0,
            1.0, 1.0,
        ],
        &[
            0.2569, 0.2569, 0.2569, 0.2086, 0.1603, 0.3799, 0.6552, 0.7495, 0.9123, 1.0, 1.0, 1.0,
            1.0, 1.0,
        ],
    ],
);

/// Thrust coefficient multiplier over (lift coefficient, thrust coefficient).
pub(crate) static LIFT_THRUST: Surface<'static> = Surface::new(
    &LIFT_COEFFICIENTS,
    &THRUST_COEFFICIENTS,
    &[
        &[
            0.7304, 0.7869, 0.8416, 0.888, 0.8993, 0.947, 1.001, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            0.8652, 0.8935, 0.9208, 0.944, 0.9496, 0.9735, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            1.674, 1.533, 1.396, 1.28, 1.252, 1.132, 0.9981, 0.9993, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            2.078, 1.852, 1.634, 1.448, 1.403, 1.212, 0.9969, 0.9989, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        &[
            2.146, 1.906, 1.673, 1.476, 1.428, 1.225, 0.9967, 0.9988, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ],
    ],
);
