//! Nacelle blockage chart.

use crate::support::interp::Surface;

/// Blockage factor over (nacelle area ratio, equivalent advance ratio).
pub(crate) static BLOCKAGE: Surface<'static> = Surface::new(
    &[0.0, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5],
    &[0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0],
    &[
        &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        &[0.99108, 0.98845, 0.98537, 0.98185, 0.97787, 0.96858, 0.95749, 0.9446],
        &[0.98267, 0.97757, 0.9716, 0.96476, 0.95705, 0.939, 0.91747, 0.89244],
        &[0.96744, 0.95786, 0.94664, 0.93378, 0.91928, 0.88536, 0.8449, 0.79788],
        &[0.9543, 0.94085, 0.9251, 0.90705, 0.8867, 0.8391, 0.78229, 0.71629],
        &[0.94325, 0.92655, 0.90699, 0.88457, 0.8593, 0.80019, 0.72966, 0.6477],
        &[0.93429, 0.91495, 0.89231, 0.86635, 0.83709, 0.76865, 0.68699, 0.5921],
    ],
);
