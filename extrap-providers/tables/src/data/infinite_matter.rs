//! Coupled-cluster energies of infinite nuclear matter, `Nmax = 20`, 54 particles.

/// Particle densities.
pub(crate) static DENSITY_ENERGY_X: [f64; 8] = [0.025, 0.05, 0.075, 0.1, 0.125, 0.15, 0.175, 0.2];

pub(crate) static DENSITY_ENERGY_Y: [f64; 8] = [
    4.824_946, 6.851_108, 8.241_808, 9.298_385, 10.127_24, 10.778_86, 11.282_75, 11.658_8,
];
