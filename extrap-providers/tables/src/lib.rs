//! Fixed-table providers for simulation energies.
//!
//! Each provider returns a dataset captured from converged many-body solver
//! runs: pairing-model coupled cluster scans over system size and interaction
//! strength, an infinite nuclear matter density scan and a pairing-model IMSRG
//! scan. The tables live in static memory and the providers never fail.
//!
//! # Examples
//! ```
//! use extrap_providers_tables::vary_dimension;
//!
//! let dataset = vary_dimension();
//! let (training, evaluation) = dataset.split();
//! assert_eq!(training.len(), 12);
//! assert_eq!(evaluation.len(), 8);
//! ```

mod data;
mod errors;
mod table;

use extrap_core::Dataset;

pub use errors::TableError;
pub use table::FixedTable;

/// Pairing-model correlation energies against particle count (`VaryDimension`).
#[must_use]
pub fn vary_dimension() -> Dataset {
    FixedTable::VaryDimension.dataset().clone()
}

/// Pairing-model correlation energies for attractive couplings
/// (`VaryInteractionNegative`).
#[must_use]
pub fn vary_interaction_negative() -> Dataset {
    FixedTable::VaryInteractionNegative.dataset().clone()
}

/// Pairing-model correlation energies for repulsive couplings
/// (`VaryInteractionPositive`).
#[must_use]
pub fn vary_interaction_positive() -> Dataset {
    FixedTable::VaryInteractionPositive.dataset().clone()
}

/// Pairing-model correlation energies across both coupling signs
/// (`VaryInteraction`).
#[must_use]
pub fn vary_interaction() -> Dataset {
    FixedTable::VaryInteraction.dataset().clone()
}

/// Infinite nuclear matter energies against density
/// (`InfiniteMatterDensityEnergyNmax20NumPart54`).
#[must_use]
pub fn infinite_matter_density_energy_nmax20_num_part54() -> Dataset {
    FixedTable::InfiniteMatterDensityEnergyNmax20NumPart54
        .dataset()
        .clone()
}

/// Pairing-model IMSRG energies against coupling (`IMSRG`).
#[must_use]
pub fn imsrg_energies() -> Dataset {
    FixedTable::ImsrgEnergies.dataset().clone()
}
