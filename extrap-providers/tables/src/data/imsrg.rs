//! Converged IMSRG ground-state energies of the pairing model.

/// Interaction strengths `g`.
pub(crate) static ENERGIES_X: [f64; 20] = [
    0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7, 0.75, 0.8, 0.85,
    0.9, 0.95, 1.0,
];

pub(crate) static ENERGIES_Y: [f64; 20] = [
    1.949_260_2,
    1.896_995_8,
    1.843_134_6,
    1.787_596_3,
    1.730_291_9,
    1.671_122_2,
    1.609_975_9,
    1.546_727_6,
    1.481_235_4,
    1.413_337_3,
    1.342_847_4,
    1.269_55,
    1.193_193_1,
    1.113_478_8,
    1.030_050_2,
    0.942_474_1,
    0.850_214_7,
    0.757_259_7,
    0.648_745_6,
    0.537_497_3,
];
