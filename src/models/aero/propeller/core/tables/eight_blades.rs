//! Eight-blade power and thrust coefficient charts.

use super::{BLADE_ANGLES, BladeFamily, Station};

pub(crate) static EIGHT_BLADES: BladeFamily = BladeFamily {
    blades: 8,
    stations: [
        // J = 0
        Station::new(
            BLADE_ANGLES[0],
            &[
                0.010067, 0.02415, 0.052105, 0.09558, 0.15551, 0.23239, 0.32644, 0.43754, 0.56533,
                0.70917, 0.86817, 1.0412, 1.2269, 1.4239, 1.6307, 1.8457, 2.0676, 2.2953, 2.5278,
                2.7645, 3.0053, 3.2501, 3.4992, 3.7534, 4.0133, 4.2799, 4.554, 4.8367, 5.129,
                5.4316, 5.7454,
            ],
            &[
                0.026217, 0.075021, 0.13915, 0.21435, 0.29791, 0.38785, 0.48254, 0.58048, 0.68028,
                0.78053, 0.87984, 0.97682, 1.0701, 1.1583, 1.2403, 1.3149, 1.3811, 1.4383, 1.486,
                1.5238, 1.5517, 1.5699, 1.5789, 1.5791, 1.5712, 1.556, 1.5343, 1.5069, 1.4746,
                1.4381, 1.3982,
            ],
        ),
        // J = 0.5
        Station::new(
            BLADE_ANGLES[1],
            &[
                -0.060076, 0.013843, 0.060161, 0.12682, 0.21423, 0.32256, 0.45169, 0.60118, 0.77029,
                0.95788, 1.1625, 1.3824, 1.6155, 1.8597, 2.1128, 2.3724, 2.6368, 2.9041, 3.1731,
                3.4431, 3.7136, 3.9848, 4.2571, 4.5313, 4.8087, 5.0903, 5.3775, 5.6715, 5.9738,
            ],
            &[
                -0.14242, 0.013211, 0.086689, 0.1706, 0.26268, 0.36111, 0.46426, 0.57062, 0.67863,
                0.78672, 0.8933, 0.99674, 1.0954, 1.1878, 1.2724, 1.348, 1.4135, 1.468, 1.511,
                1.5422, 1.5618, 1.5699, 1.5672, 1.5543, 1.5321, 1.5016, 1.4637, 1.4195, 1.3699,
            ],
        ),
        // J = 1
        Station::new(
            BLADE_ANGLES[2],
            &[
                -0.25458, -0.079969, 0.066448, 0.1972, 0.35421, 0.53705, 0.74486, 0.97628, 1.2295,
                1.5021, 1.7913, 2.094, 2.4069, 2.7266, 3.05, 3.374, 3.6964, 4.0154, 4.3299, 4.6395,
                4.9444, 5.2453, 5.5435, 5.8404, 6.1377, 6.4374,
            ],
            &[
                -0.27999, -0.090049, 0.055366, 0.16605, 0.28237, 0.40284, 0.5259, 0.64986, 0.77297,
                0.89334, 1.0091, 1.1182, 1.219, 1.3096, 1.3887, 1.4549, 1.5073, 1.5456, 1.5693,
                1.5788, 1.5745, 1.5571, 1.5276, 1.4871, 1.4369, 1.3782,
            ],
        ),
        // J = 1.5
        Station::new(
            BLADE_ANGLES[3],
            &[
                -0.47386, -0.18415, 0.087193, 0.32163, 0.58828, 0.88557, 1.2112, 1.5621, 1.9346,
                2.3241, 2.7261, 3.1354, 3.5472, 3.957, 4.3608, 4.7554, 5.1388, 5.5096, 5.8676,
                6.2133, 6.5481, 6.8736, 7.1922,
            ],
            &[
                -0.34135, -0.13271, 0.049688, 0.19082, 0.33534, 0.48146, 0.62724, 0.77052, 0.90905,
                1.0405, 1.1626, 1.2731, 1.3701, 1.4519, 1.5172, 1.565, 1.5951, 1.6072, 1.602,
                1.5801, 1.5427, 1.4909, 1.4263,
            ],
        ),
        // J = 2
        Station::new(
            BLADE_ANGLES[4],
            &[
                -0.96226, -0.54494, -0.10259, 0.27887, 0.66944, 1.097, 1.5575, 2.0459, 2.5561,
                3.0814, 3.6147, 4.149, 4.6774, 5.1941, 5.6942, 6.174, 6.6313, 7.0652, 7.4761,
                7.8653, 8.235,
            ],
            &[
                -0.52358, -0.29061, -0.059058, 0.12706, 0.30011, 0.47321, 0.64388, 0.80944, 0.96706,
                1.1139, 1.2473, 1.3647, 1.4639, 1.5432, 1.6013, 1.6376, 1.6519, 1.6446, 1.6166,
                1.5689, 1.5032,
            ],
        ),
        // J = 3
        Station::new(
            BLADE_ANGLES[5],
            &[
                -1.6908, -0.89413, -0.063172, 0.6886, 1.4793, 2.3135, 3.18, 4.0661, 4.9583, 5.8433,
                6.7085, 7.5427, 8.3367, 9.0838, 9.7797, 10.423, 11.013,
            ],
            &[
                -0.61085, -0.31758, -0.03033, 0.21153, 0.44505, 0.67117, 0.88582, 1.0849, 1.2644,
                1.4206, 1.5504, 1.6513, 1.7214, 1.7599, 1.7664, 1.7415, 1.6866,
            ],
        ),
        // J = 5
        Station::new(
            BLADE_ANGLES[6],
            &[
                -2.7848, -0.78277, 1.1905, 3.1803, 5.2225, 7.2827, 9.3259, 11.318, 13.23, 15.035,
                16.713, 18.251,
            ],
            &[
                -0.60466, -0.17581, 0.2147, 0.57309, 0.90562, 1.2051, 1.4647, 1.6785, 1.8415, 1.95,
                2.0017, 1.9958,
            ],
        ),
    ],
};
