//! The fixed-table catalogue and its provider implementation.

use std::{fmt, str::FromStr};

use extrap_core::{Dataset, DatasetProvider};
use tracing::{debug, instrument};

use crate::data::{imsrg, infinite_matter, pairing};
use crate::errors::TableError;

static VARY_DIMENSION: Dataset = Dataset::from_static(
    "VaryDimension",
    12,
    &pairing::VARY_DIMENSION_X,
    &pairing::VARY_DIMENSION_Y,
);

static VARY_INTERACTION_NEGATIVE: Dataset = Dataset::from_static(
    "VaryInteractionNegative",
    12,
    &pairing::VARY_INTERACTION_NEGATIVE_X,
    &pairing::VARY_INTERACTION_NEGATIVE_Y,
);

static VARY_INTERACTION_POSITIVE: Dataset = Dataset::from_static(
    "VaryInteractionPositive",
    10,
    &pairing::VARY_INTERACTION_POSITIVE_X,
    &pairing::VARY_INTERACTION_POSITIVE_Y,
);

static VARY_INTERACTION: Dataset = Dataset::from_static(
    "VaryInteraction",
    24,
    &pairing::VARY_INTERACTION_X,
    &pairing::VARY_INTERACTION_Y,
);

static INFINITE_MATTER_DENSITY_ENERGY: Dataset = Dataset::from_static(
    "InfiniteMatterDensityEnergyNmax20NumPart54",
    6,
    &infinite_matter::DENSITY_ENERGY_X,
    &infinite_matter::DENSITY_ENERGY_Y,
);

static IMSRG_ENERGIES: Dataset =
    Dataset::from_static("IMSRG", 12, &imsrg::ENERGIES_X, &imsrg::ENERGIES_Y);

/// Identifies one of the embedded simulation tables.
///
/// # Examples
/// ```
/// use extrap_core::DatasetProvider;
/// use extrap_providers_tables::FixedTable;
///
/// let table: FixedTable = "IMSRG".parse()?;
/// assert_eq!(table, FixedTable::ImsrgEnergies);
/// assert_eq!(table.training_dimension(), 12);
/// assert_eq!(table.dataset().len(), 20);
/// # Ok::<(), extrap_providers_tables::TableError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FixedTable {
    /// Pairing-model correlation energy against particle count.
    VaryDimension,
    /// Pairing-model correlation energy against attractive coupling.
    VaryInteractionNegative,
    /// Pairing-model correlation energy against repulsive coupling.
    VaryInteractionPositive,
    /// The attractive and repulsive coupling scans joined in order.
    VaryInteraction,
    /// Infinite nuclear matter energy against density.
    InfiniteMatterDensityEnergyNmax20NumPart54,
    /// Pairing-model IMSRG energy against coupling.
    ImsrgEnergies,
}

impl FixedTable {
    /// Every table, in catalogue order.
    pub const ALL: [Self; 6] = [
        Self::VaryDimension,
        Self::VaryInteractionNegative,
        Self::VaryInteractionPositive,
        Self::VaryInteraction,
        Self::InfiniteMatterDensityEnergyNmax20NumPart54,
        Self::ImsrgEnergies,
    ];

    /// Returns the embedded dataset.
    #[must_use]
    pub const fn dataset(self) -> &'static Dataset {
        match self {
            Self::VaryDimension => &VARY_DIMENSION,
            Self::VaryInteractionNegative => &VARY_INTERACTION_NEGATIVE,
            Self::VaryInteractionPositive => &VARY_INTERACTION_POSITIVE,
            Self::VaryInteraction => &VARY_INTERACTION,
            Self::InfiniteMatterDensityEnergyNmax20NumPart54 => &INFINITE_MATTER_DENSITY_ENERGY,
            Self::ImsrgEnergies => &IMSRG_ENERGIES,
        }
    }

    /// Returns the dataset name, which is also the lookup key.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.dataset().name()
    }

    /// Describes where the numbers come from.
    #[must_use]
    pub const fn origin(self) -> &'static str {
        match self {
            Self::VaryDimension => {
                "coupled cluster doubles correlation energies of the pairing model; \
                 x is the number of particles (and holes)"
            }
            Self::VaryInteractionNegative => {
                "coupled cluster doubles correlation energies of the pairing model; \
                 x is a negative interaction strength"
            }
            Self::VaryInteractionPositive => {
                "coupled cluster doubles correlation energies of the pairing model; \
                 x is a positive interaction strength"
            }
            Self::VaryInteraction => {
                "coupled cluster doubles correlation energies of the pairing model; \
                 x is the interaction strength, negative then positive"
            }
            Self::InfiniteMatterDensityEnergyNmax20NumPart54 => {
                "coupled cluster energies of infinite nuclear matter with Nmax 20 and \
                 54 particles; x is the particle density"
            }
            Self::ImsrgEnergies => {
                "converged 4p4h IMSRG energies of the pairing model; \
                 x is the interaction strength"
            }
        }
    }

    /// Resolves a table by its exact dataset name.
    ///
    /// # Errors
    /// Returns [`TableError::UnknownTable`] when no table carries `name`.
    #[instrument(name = "tables.lookup", level = "debug", err(level = "warn"))]
    pub fn lookup(name: &str) -> Result<Self, TableError> {
        let table = Self::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| TableError::UnknownTable {
                name: name.to_owned(),
            })?;
        debug!(table = table.name(), "resolved fixed table");
        Ok(table)
    }
}

impl fmt::Display for FixedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixedTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl DatasetProvider for FixedTable {
    fn name(&self) -> &str {
        Self::name(*self)
    }

    fn dataset(&self) -> Dataset {
        Self::dataset(*self).clone()
    }

    fn training_dimension(&self) -> usize {
        Self::dataset(*self).training_dimension()
    }
}
