//! Four-blade power and thrust coefficient charts.

use super::{BLADE_ANGLES, BladeFamily, Station};

pub(crate) static FOUR_BLADES: BladeFamily = BladeFamily {
    blades: 4,
    stations: [
        // J = 0
        Station::new(
            BLADE_ANGLES[0],
            &[
                0.005429, 0.01418, 0.029907, 0.052749, 0.082632, 0.11935, 0.16262, 0.21205, 0.26721,
                0.32764, 0.39285, 0.46237, 0.53579, 0.61274, 0.69295, 0.77623, 0.8625, 0.95175,
                1.0441, 1.1396, 1.2385, 1.3411, 1.4475, 1.558, 1.6729, 1.7923, 1.9166, 2.0458,
                2.1802, 2.3199, 2.465,
            ],
            &[
                0.021231, 0.055117, 0.095911, 0.1409, 0.18849, 0.23753, 0.28707, 0.33628, 0.3844,
                0.43076, 0.47473, 0.5158, 0.55352, 0.58757, 0.61772, 0.64384, 0.66591, 0.68399,
                0.69824, 0.70884, 0.71604, 0.7201, 0.72131, 0.71995, 0.71629, 0.7106, 0.70313,
                0.6941, 0.68373, 0.6722, 0.65968,
            ],
        ),
        // J = 0.5
        Station::new(
            BLADE_ANGLES[1],
            &[
                -0.025612, 0.0074959, 0.035319, 0.071585, 0.11593, 0.16792, 0.22704, 0.29269,
                0.36421, 0.44089, 0.52204, 0.60696, 0.69504, 0.78577, 0.87874, 0.97368, 1.0705,
                1.1691, 1.2696, 1.3723, 1.4773, 1.5851, 1.6959, 1.8101, 1.928, 2.0499, 2.1762,
                2.307, 2.4427,
            ],
            &[
                -0.06142, 0.0088759, 0.05543, 0.10486, 0.15614, 0.20837, 0.26073, 0.31242, 0.36268,
                0.41082, 0.45618, 0.49818, 0.53636, 0.57035, 0.59988, 0.62483, 0.64515, 0.66093,
                0.67231, 0.67951, 0.68281, 0.68249, 0.67888, 0.67229, 0.66304, 0.65143, 0.63774,
                0.62224, 0.60517,
            ],
        ),
        // J = 1
        Station::new(
            BLADE_ANGLES[2],
            &[
                -0.1066, -0.033485, 0.035565, 0.10364, 0.18039, 0.26508, 0.35684, 0.45471, 0.55763,
                0.66456, 0.77447, 0.88644, 0.99968, 1.1136, 1.2277, 1.3419, 1.4561, 1.5704, 1.6851,
                1.8006, 1.9173, 2.0356, 2.1561, 2.2792, 2.4055, 2.5352,
            ],
            &[
                -0.11661, -0.037505, 0.030739, 0.090019, 0.14965, 0.20889, 0.26696, 0.32308,
                0.37647, 0.42644, 0.47234, 0.51363, 0.54987, 0.58079, 0.6062, 0.62608, 0.64049,
                0.64961, 0.6537, 0.65305, 0.64802, 0.63896, 0.62625, 0.61027, 0.59135, 0.56983,
            ],
        ),
        // J = 1.5
        Station::new(
            BLADE_ANGLES[3],
            &[
                -0.19461, -0.075628, 0.042839, 0.15629, 0.2789, 0.40937, 0.54621, 0.68787, 0.83277,
                0.97938, 1.1264, 1.2725, 1.417, 1.5592, 1.6988, 1.8358, 1.9703, 2.1028, 2.2338,
                2.3638, 2.4937, 2.624, 2.7555,
            ],
            &[
                -0.1404, -0.054587, 0.025158, 0.09499, 0.16408, 0.23153, 0.29641, 0.35781, 0.41487,
                0.46683, 0.51303, 0.55296, 0.58628, 0.61279, 0.63245, 0.64536, 0.65173, 0.65187,
                0.64614, 0.63496, 0.61877, 0.59801, 0.57313,
            ],
        ),
        // J = 2
        Station::new(
            BLADE_ANGLES[4],
            &[
                -0.41059, -0.23252, -0.043776, 0.13598, 0.32054, 0.5143, 0.71491, 0.91987, 1.1267,
                1.3332, 1.5373, 1.7373, 1.9319, 2.1205, 2.3025, 2.4782, 2.6479, 2.8121, 2.9719,
                3.128, 3.2815,
            ],
            &[
                -0.21936, -0.12176, -0.024743, 0.061735, 0.14377, 0.22344, 0.29956, 0.37101,
                0.43673, 0.49577, 0.54735, 0.5909, 0.62601, 0.6525, 0.67036, 0.67974, 0.68095,
                0.67438, 0.6605, 0.63984, 0.61293,
            ],
        ),
        // J = 3
        Station::new(
            BLADE_ANGLES[5],
            &[
                -0.76447, -0.40428, -0.028563, 0.33567, 0.71048, 1.0937, 1.48, 1.8641, 2.2415,
                2.608, 2.9603, 3.2963, 3.6146, 3.9147, 4.1969, 4.4623, 4.7121,
            ],
            &[
                -0.25554, -0.13285, -0.012688, 0.096289, 0.2004, 0.29888, 0.39012, 0.47258, 0.54495,
                0.60616, 0.65542, 0.69224, 0.7164, 0.72797, 0.72722, 0.71462, 0.69075,
            ],
        ),
        // J = 5
        Station::new(
            BLADE_ANGLES[6],
            &[
                -1.3327, -0.37461, 0.58851, 1.5579, 2.5329, 3.4983, 4.4405, 5.3472, 6.2089, 7.0185,
                7.7715, 8.4662,
            ],
            &[
                -0.25157, -0.073144, 0.092741, 0.24578, 0.38568, 0.50982, 0.61584, 0.7018, 0.76621,
                0.80811, 0.82702, 0.82293,
            ],
        ),
    ],
};
