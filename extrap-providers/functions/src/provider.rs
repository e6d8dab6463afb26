//! [`DatasetProvider`] adapter pairing a function with its sampling grid.

use extrap_core::{Dataset, DatasetProvider, SamplingGrid};

use crate::function::GeneratedFunction;

/// Provides a [`GeneratedFunction`] sampled over a [`SamplingGrid`].
///
/// # Examples
/// ```
/// use extrap_core::{DatasetProvider, SamplingGrid};
/// use extrap_providers_functions::{FunctionProvider, GeneratedFunction};
///
/// let grid = SamplingGrid::builder()
///     .with_start(0.0)
///     .with_step(0.25)
///     .with_points(8)
///     .with_training_dimension(4)
///     .build()?;
/// let provider = FunctionProvider::new(GeneratedFunction::Arctangent {
///     scale_out: 1.0,
///     scale_in: 1.0,
/// })
/// .with_grid(grid);
///
/// let dataset = provider.dataset();
/// assert_eq!(dataset.name(), "Arctangent");
/// assert_eq!(dataset.len(), 8);
/// assert_eq!(provider.training_dimension(), 4);
/// # Ok::<(), extrap_core::GridError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunctionProvider {
    function: GeneratedFunction,
    grid: SamplingGrid,
}

impl FunctionProvider {
    /// Pairs `function` with the default grid.
    #[must_use]
    pub fn new(function: GeneratedFunction) -> Self {
        Self {
            function,
            grid: SamplingGrid::default(),
        }
    }

    /// Replaces the sampling grid.
    #[must_use]
    pub const fn with_grid(mut self, grid: SamplingGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Returns the sampled function.
    #[must_use]
    pub const fn function(&self) -> GeneratedFunction {
        self.function
    }

    /// Returns the sampling grid.
    #[must_use]
    pub const fn grid(&self) -> SamplingGrid {
        self.grid
    }
}

impl From<GeneratedFunction> for FunctionProvider {
    fn from(function: GeneratedFunction) -> Self {
        Self::new(function)
    }
}

impl DatasetProvider for FunctionProvider {
    fn name(&self) -> &str {
        self.function.name()
    }

    fn dataset(&self) -> Dataset {
        self.function.sample(&self.grid)
    }

    fn training_dimension(&self) -> usize {
        self.grid.training_dimension()
    }
}
