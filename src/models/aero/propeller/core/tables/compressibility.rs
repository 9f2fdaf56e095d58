//! Compressibility charts.

use crate::support::interp::{Curve, Surface};

/// Critical helical tip Mach number over (lift coefficient, blade angle in degrees).
pub(crate) static CRITICAL_MACH: Surface<'static> = Surface::new(
    &[0.3, 0.4, 0.5, 0.6, 0.7, 0.8],
    &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
    &[
        &[0.883, 0.876, 0.869, 0.862, 0.855, 0.848, 0.841],
        &[0.8815, 0.8745, 0.8675, 0.8605, 0.8535, 0.8465, 0.8395],
        &[0.881, 0.874, 0.867, 0.86, 0.853, 0.846, 0.839],
        &[0.871, 0.864, 0.857, 0.85, 0.843, 0.836, 0.829],
        &[0.841, 0.834, 0.827, 0.82, 0.813, 0.806, 0.799],
        &[0.791, 0.784, 0.777, 0.77, 0.763, 0.756, 0.749],
    ],
);

/// Thrust loss over the helical tip Mach number in excess of critical.
pub(crate) static MACH_LOSS: Curve<'static> = Curve::new(
    &[0.0, 0.02, 0.04, 0.06, 0.08, 0.1, 0.15, 0.2, 0.3],
    &[0.0, 0.0005803, 0.002321, 0.005223, 0.009285, 0.01451, 0.03264, 0.05803, 0.1306],
);
