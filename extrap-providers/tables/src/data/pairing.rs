//! Pairing-model coupled-cluster doubles correlation energies.

/// Number of particles (equal to the number of holes) in each run.
pub(crate) static VARY_DIMENSION_X: [f64; 20] = [
    2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0,
    34.0, 36.0, 38.0, 40.0,
];

pub(crate) static VARY_DIMENSION_Y: [f64; 20] = [
    -0.030_776_405_49,
    -0.083_362_332_66,
    -0.144_672_956_7,
    -0.211_675_373_2,
    -0.283_063_739_2,
    -0.358_134_134_1,
    -0.436_462_435,
    -0.517_778_384_6,
    -0.601_906_727_1,
    -0.688_736_357_1,
    -0.778_202_895_2,
    -0.870_278_403_4,
    -0.964_965_253_6,
    -1.062_292_565,
    -1.162_314_51,
    -1.265_109_911,
    -1.370_782_966,
    -1.479_465_113,
    -1.591_317_992,
    -1.706_537_67,
];

/// Attractive interaction strengths `g` in `[-1.0, -0.05]`.
pub(crate) static VARY_INTERACTION_NEGATIVE_X: [f64; 20] = [
    -1.0, -0.95, -0.9, -0.85, -0.8, -0.75, -0.7, -0.65, -0.6, -0.55, -0.5, -0.45, -0.4, -0.35,
    -0.3, -0.25, -0.2, -0.15, -0.1, -0.05,
];

pub(crate) static VARY_INTERACTION_NEGATIVE_Y: [f64; 20] = [
    -1.019_822_621,
    -0.937_342_875_9,
    -0.857_153_133_5,
    -0.779_362_450_3,
    -0.704_088_797_4,
    -0.631_460_130_6,
    -0.561_615_627,
    -0.494_707_103_8,
    -0.430_900_716_3,
    -0.370_378_912_6,
    -0.313_342_764_5,
    -0.260_014_722_8,
    -0.210_641_933_8,
    -0.165_500_206_4,
    -0.124_898_833_6,
    -0.089_186_472_96,
    -0.058_758_397_19,
    -0.034_065_489_92,
    -0.015_625_534_55,
    -0.004_037_522_178,
];

/// Repulsive interaction strengths `g` in `[0.05, 0.8]`.
pub(crate) static VARY_INTERACTION_POSITIVE_X: [f64; 16] = [
    0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7, 0.75, 0.8,
];

pub(crate) static VARY_INTERACTION_POSITIVE_Y: [f64; 16] = [
    -0.004_334_904_077,
    -0.018_018_964_84,
    -0.042_225_765_07,
    -0.078_383_105_63,
    -0.128_252_924,
    -0.194_045_396_6,
    -0.278_586_645_6,
    -0.385_573_948_7,
    -0.519_980_978_5,
    -0.688_736_357_1,
    -0.901_940_086_9,
    -1.175_251_697,
    -1.535_217_909,
    -2.033_720_441,
    -2.803_657_27,
    -4.719_209_688,
];

/// Attractive then repulsive strengths; `g = 0` has no run.
pub(crate) static VARY_INTERACTION_X: [f64; 36] = [
    -1.0, -0.95, -0.9, -0.85, -0.8, -0.75, -0.7, -0.65, -0.6, -0.55, -0.5, -0.45, -0.4, -0.35,
    -0.3, -0.25, -0.2, -0.15, -0.1, -0.05, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5,
    0.55, 0.6, 0.65, 0.7, 0.75, 0.8,
];

pub(crate) static VARY_INTERACTION_Y: [f64; 36] = [
    -1.019_822_621,
    -0.937_342_875_9,
    -0.857_153_133_5,
    -0.779_362_450_3,
    -0.704_088_797_4,
    -0.631_460_130_6,
    -0.561_615_627,
    -0.494_707_103_8,
    -0.430_900_716_3,
    -0.370_378_912_6,
    -0.313_342_764_5,
    -0.260_014_722_8,
    -0.210_641_933_8,
    -0.165_500_206_4,
    -0.124_898_833_6,
    -0.089_186_472_96,
    -0.058_758_397_19,
    -0.034_065_489_92,
    -0.015_625_534_55,
    -0.004_037_522_178,
    -0.004_334_904_077,
    -0.018_018_964_84,
    -0.042_225_765_07,
    -0.078_383_105_63,
    -0.128_252_924,
    -0.194_045_396_6,
    -0.278_586_645_6,
    -0.385_573_948_7,
    -0.519_980_978_5,
    -0.688_736_357_1,
    -0.901_940_086_9,
    -1.175_251_697,
    -1.535_217_909,
    -2.033_720_441,
    -2.803_657_27,
    -4.719_209_688,
];
