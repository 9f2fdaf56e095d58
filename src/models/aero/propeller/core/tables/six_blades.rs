//! Six-blade power and thrust coefficient charts.

use super::{BLADE_ANGLES, BladeFamily, Station};

pub(crate) static SIX_BLADES: BladeFamily = BladeFamily {
    blades: 6,
    stations: [
        // J = 0
        Station::new(
            BLADE_ANGLES[0],
            &[
                0.0077202, 0.019429, 0.041705, 0.075314, 0.12056, 0.17746, 0.24586, 0.32538,
                0.41551, 0.51557, 0.62479, 0.74229, 0.86719, 0.9986, 1.1357, 1.2778, 1.4243, 1.5749,
                1.7293, 1.8876, 2.0499, 2.2165, 2.3878, 2.5643, 2.7464, 2.9348, 3.1299, 3.3322,
                3.5423, 3.7603, 3.9869,
            ],
            &[
                0.02398, 0.065999, 0.1192, 0.17995, 0.24601, 0.31577, 0.3879, 0.4612, 0.53455,
                0.60689, 0.67718, 0.74445, 0.80781, 0.86646, 0.91972, 0.96706, 1.0081, 1.0426,
                1.0705, 1.0919, 1.1071, 1.1162, 1.1198, 1.1183, 1.1121, 1.1018, 1.0878, 1.0706,
                1.0506, 1.0283, 1.0041,
            ],
        ),
        // J = 0.5
        Station::new(
            BLADE_ANGLES[1],
            &[
                -0.042181, 0.010797, 0.049023, 0.10171, 0.16871, 0.24971, 0.34422, 0.45155, 0.57084,
                0.70103, 0.84091, 0.98917, 1.1445, 1.3055, 1.4712, 1.6403, 1.8121, 1.9861, 2.1619,
                2.3396, 2.5194, 2.7016, 2.8868, 3.0757, 3.2689, 3.4672, 3.6713, 3.8818, 4.0994,
            ],
            &[
                -0.1, 0.01139, 0.073085, 0.14128, 0.21426, 0.29062, 0.3691, 0.44847, 0.52755,
                0.60515, 0.68014, 0.7514, 0.81791, 0.87874, 0.93312, 0.98043, 1.0202, 1.0523,
                1.0766, 1.0932, 1.1025, 1.1047, 1.1003, 1.09, 1.0743, 1.0537, 1.0289, 1.0005,
                0.96894,
            ],
        ),
        // J = 1
        Station::new(
            BLADE_ANGLES[2],
            &[
                -0.17875, -0.056149, 0.052474, 0.15456, 0.27363, 0.40891, 0.55932, 0.7235, 0.89982,
                1.0864, 1.2813, 1.4825, 1.6881, 1.8961, 2.1052, 2.3141, 2.522, 2.7285, 2.9336,
                3.1375, 3.3408, 3.5443, 3.7489, 3.9556, 4.1653, 4.379,
            ],
            &[
                -0.19659, -0.063226, 0.044644, 0.13235, 0.22264, 0.31435, 0.40628, 0.49715, 0.58566,
                0.67048, 0.75035, 0.82406, 0.89054, 0.94889, 0.99839, 1.0386, 1.0692, 1.0902,
                1.1018, 1.1042, 1.0982, 1.0841, 1.0628, 1.0348, 1.0011, 0.96215,
            ],
        ),
        // J = 1.5
        Station::new(
            BLADE_ANGLES[3],
            &[
                -0.33271, -0.1293, 0.06684, 0.24538, 0.44356, 0.65969, 0.89164, 1.1369, 1.3926,
                1.6557, 1.9233, 2.1925, 2.4607, 2.7258, 2.9861, 3.2407, 3.4889, 3.7308, 3.967,
                4.1983, 4.4258, 4.6507, 4.8745,
            ],
            &[
                -0.23967, -0.093182, 0.038647, 0.14717, 0.25645, 0.3651, 0.47164, 0.5745, 0.67214,
                0.763, 0.84569, 0.91894, 0.98171, 1.0332, 1.073, 1.1007, 1.1166, 1.1208, 1.1138,
                1.0963, 1.0692, 1.0331, 0.9891,
            ],
        ),
        // J = 2
        Station::new(
            BLADE_ANGLES[4],
            &[
                -0.67563, -0.38262, -0.072035, 0.20929, 0.498, 0.80769, 1.1349, 1.4758, 1.826,
                2.181, 2.5367, 2.8889, 3.2344, 3.5702, 3.8945, 4.2062, 4.5048, 4.7909, 5.0653,
                5.3294, 5.5848,
            ],
            &[
                -0.36762, -0.20404, -0.041466, 0.096062, 0.2253, 0.3527, 0.47642, 0.59454, 0.70515,
                0.80642, 0.89671, 0.9746, 1.039, 1.089, 1.1244, 1.1448, 1.1507, 1.1425, 1.1208,
                1.0866, 1.0409,
            ],
        ),
        // J = 3
        Station::new(
            BLADE_ANGLES[5],
            &[
                -1.1871, -0.6278, -0.044355, 0.50231, 1.0711, 1.6619, 2.2665, 2.8762, 3.4826,
                4.0777, 4.6544, 5.2073, 5.7319, 6.2258, 6.6878, 7.1183, 7.5184,
            ],
            &[
                -0.4289, -0.22298, -0.021296, 0.15503, 0.32438, 0.48646, 0.63845, 0.77763, 0.90146,
                1.0077, 1.0946, 1.1609, 1.2057, 1.2288, 1.2304, 1.211, 1.1715,
            ],
        ),
        // J = 5
        Station::new(
            BLADE_ANGLES[6],
            &[
                -1.9553, -0.5496, 0.84994, 2.26, 3.6923, 5.1236, 6.5314, 7.8952, 9.1971, 10.423,
                11.563, 12.611,
            ],
            &[
                -0.42455, -0.12344, 0.15368, 0.40872, 0.64355, 0.85345, 1.034, 1.1816, 1.2931,
                1.3664, 1.4005, 1.3949,
            ],
        ),
    ],
};
