//! Two-blade power and thrust coefficient charts.

use super::{BLADE_ANGLES, BladeFamily, Station};

pub(crate) static TWO_BLADES: BladeFamily = BladeFamily {
    blades: 2,
    stations: [
        // J = 0
        Station::new(
            BLADE_ANGLES[0],
            &[
                0.0032923, 0.0086394, 0.017533, 0.029852, 0.04544, 0.064111, 0.085668, 0.10991,
                0.13662, 0.16564, 0.19679, 0.22995, 0.26503, 0.30198, 0.34079, 0.38146, 0.42404,
                0.46859, 0.51518, 0.5639, 0.61482, 0.66803, 0.72362, 0.78164, 0.84217, 0.90527,
                0.971, 1.0394, 1.1105, 1.1844, 1.261,
            ],
            &[
                0.014999, 0.035334, 0.058096, 0.082019, 0.10637, 0.13063, 0.15435, 0.17719, 0.19883,
                0.21903, 0.23761, 0.25445, 0.26947, 0.28266, 0.29404, 0.30366, 0.31163, 0.31804,
                0.32303, 0.32671, 0.32922, 0.33068, 0.3312, 0.33089, 0.32985, 0.32817, 0.32592,
                0.32319, 0.32002, 0.31648, 0.31262,
            ],
        ),
        // J = 0.5
        Station::new(
            BLADE_ANGLES[1],
            &[
                -0.013059, 0.0045311, 0.021903, 0.04294, 0.067376, 0.094919, 0.12526, 0.15807,
                0.19306, 0.22995, 0.26848, 0.30848, 0.3498, 0.39238, 0.43619, 0.48126, 0.52766,
                0.57548, 0.62483, 0.67586, 0.72868, 0.78344, 0.84026, 0.89925, 0.96052, 1.0242,
                1.0903, 1.159, 1.2302,
            ],
            &[
                -0.029162, 0.0055498, 0.033644, 0.062093, 0.090478, 0.1184, 0.14547, 0.17134,
                0.1957, 0.21829, 0.2389, 0.25738, 0.27364, 0.28767, 0.29948, 0.30913, 0.31673,
                0.32241, 0.32629, 0.32854, 0.32928, 0.32868, 0.32687, 0.32397, 0.3201, 0.31538,
                0.3099, 0.30374, 0.29698,
            ],
        ),
        // J = 1
        Station::new(
            BLADE_ANGLES[2],
            &[
                -0.053852, -0.016916, 0.020563, 0.059128, 0.10094, 0.14553, 0.19239, 0.24106,
                0.29107, 0.34205, 0.39366, 0.4457, 0.49801, 0.55055, 0.60334, 0.65649, 0.71013,
                0.76445, 0.81964, 0.87591, 0.93348, 0.99254, 1.0533, 1.1159, 1.1805, 1.2473,
            ],
            &[
                -0.059037, -0.018987, 0.018189, 0.05264, 0.086472, 0.11925, 0.15055, 0.17999,
                0.20723, 0.232, 0.25408, 0.27336, 0.28977, 0.30331, 0.31405, 0.32209, 0.32757,
                0.33065, 0.33152, 0.33034, 0.3273, 0.32257, 0.31631, 0.30866, 0.29977, 0.28975,
            ],
        ),
        // J = 1.5
        Station::new(
            BLADE_ANGLES[3],
            &[
                -0.098907, -0.038436, 0.023855, 0.086397, 0.15211, 0.2202, 0.28985, 0.36033,
                0.43098, 0.50126, 0.57079, 0.63929, 0.70666, 0.77292, 0.83818, 0.90266, 0.96661,
                1.0303, 1.0942, 1.1584, 1.2234, 1.2894, 1.3567,
            ],
            &[
                -0.071481, -0.027791, 0.01422, 0.053264, 0.091226, 0.12758, 0.16183, 0.19353,
                0.22231, 0.24788, 0.27005, 0.2887, 0.30381, 0.31542, 0.32364, 0.32862, 0.33054,
                0.3296, 0.32601, 0.31998, 0.31172, 0.30142, 0.28925,
            ],
        ),
        // J = 2
        Station::new(
            BLADE_ANGLES[4],
            &[
                -0.20201, -0.1144, -0.021538, 0.071343, 0.16659, 0.26443, 0.3636, 0.46294, 0.56141,
                0.65817, 0.7526, 0.8443, 0.93307, 1.0189, 1.102, 1.1827, 1.2614, 1.3384, 1.4143,
                1.4896, 1.5646,
            ],
            &[
                -0.10174, -0.056471, -0.011476, 0.030751, 0.07114, 0.10978, 0.1461, 0.1796, 0.20983,
                0.23645, 0.25923, 0.27802, 0.29279, 0.30356, 0.31044, 0.3136, 0.31323, 0.30954,
                0.30276, 0.29313, 0.28086,
            ],
        ),
        // J = 3
        Station::new(
            BLADE_ANGLES[5],
            &[
                -0.35439, -0.18742, -0.013241, 0.16104, 0.33847, 0.51713, 0.69461, 0.86875, 1.0378,
                1.2004, 1.3556, 1.503, 1.6425, 1.7743, 1.8991, 2.0175, 2.1303,
            ],
            &[
                -0.11009, -0.057233, -0.005466, 0.043115, 0.089283, 0.13248, 0.17202, 0.20731,
                0.23787, 0.26335, 0.28353, 0.29832, 0.30772, 0.31185, 0.3109, 0.30508, 0.29467,
            ],
        ),
        // J = 5
        Station::new(
            BLADE_ANGLES[6],
            &[
                -0.57976, -0.16296, 0.25968, 0.68466, 1.1081, 1.524, 1.9269, 2.3124, 2.6772, 3.0193,
                3.3376, 3.6323,
            ],
            &[
                -0.10176, -0.029587, 0.038138, 0.10075, 0.15761, 0.20773, 0.25024, 0.28447, 0.30991,
                0.32628, 0.33347, 0.33153,
            ],
        ),
    ],
};
