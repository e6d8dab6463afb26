//! Sampling grids describing the x domain of generated datasets.
//!
//! The default grid holds 200 points from `-1.0` up to, but excluding, `1.0`
//! at a step of `0.01`, with the first 50 points (`[-1.0, -0.5)`) reserved for
//! training.

use std::{borrow::Cow, num::NonZeroUsize};

use tracing::debug;

use crate::{dataset::Dataset, error::GridError};

const DEFAULT_START: f64 = -1.0;
const DEFAULT_STEP: f64 = 0.01;
const DEFAULT_POINTS: NonZeroUsize = nonzero(200);
const DEFAULT_TRAINING_DIMENSION: NonZeroUsize = nonzero(50);

const fn nonzero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(count) => count,
        None => panic!("grid defaults must be non-zero"),
    }
}

/// An evenly spaced sequence of x values plus the training prefix length.
///
/// Value `i` is computed as `start + i * step` so rounding error does not
/// accumulate along the grid.
///
/// # Examples
/// ```
/// use extrap_core::SamplingGrid;
///
/// let grid = SamplingGrid::default();
/// assert_eq!(grid.points(), 200);
/// assert_eq!(grid.training_dimension(), 50);
///
/// let values = grid.values();
/// assert_eq!(values.first(), Some(&-1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingGrid {
    start: f64,
    step: f64,
    points: NonZeroUsize,
    training_dimension: NonZeroUsize,
}

impl Default for SamplingGrid {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            step: DEFAULT_STEP,
            points: DEFAULT_POINTS,
            training_dimension: DEFAULT_TRAINING_DIMENSION,
        }
    }
}

impl SamplingGrid {
    /// Returns a builder seeded with the default grid.
    #[must_use]
    pub fn builder() -> SamplingGridBuilder {
        SamplingGridBuilder::new()
    }

    /// Returns the first x value.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Returns the spacing between consecutive x values.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of x values.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.points.get()
    }

    /// Returns the number of leading points reserved for training.
    #[must_use]
    pub const fn training_dimension(&self) -> usize {
        self.training_dimension.get()
    }

    /// Returns the exclusive upper bound, `start + points * step`.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.value_at(self.points())
    }

    /// Computes every x value of the grid.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        (0..self.points()).map(|index| self.value_at(index)).collect()
    }

    /// Evaluates `f` at every grid value and wraps the result as a dataset.
    ///
    /// The returned dataset always satisfies the dataset invariants because
    /// the grid was validated when it was built.
    ///
    /// # Examples
    /// ```
    /// use extrap_core::SamplingGrid;
    ///
    /// let dataset = SamplingGrid::default().sample("Square", |x| x * x);
    /// assert_eq!(dataset.name(), "Square");
    /// assert_eq!(dataset.y_values().first(), Some(&1.0));
    /// ```
    #[must_use]
    pub fn sample(
        &self,
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(f64) -> f64,
    ) -> Dataset {
        let dataset_name = name.into();
        let x_values = self.values();
        let y_values: Vec<f64> = x_values.iter().map(|&x| f(x)).collect();
        debug!(
            dataset = %dataset_name,
            points = x_values.len(),
            training_dimension = self.training_dimension(),
            "sampled grid",
        );
        Dataset::from_checked_parts(dataset_name, self.training_dimension, x_values, y_values)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "grid values are an affine function of the index"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "index rounding that merges neighbours is rejected by `check_span`"
    )]
    const fn value_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Checks that the last value is finite and that neighbouring values at
    /// both ends stay distinct.
    fn check_span(&self) -> Result<(), GridError> {
        let last = self.points.get() - 1;
        if !self.value_at(last).is_finite() {
            return Err(GridError::NonFiniteParameter { parameter: "end" });
        }
        if last > 0
            && (self.value_at(1) <= self.start || self.value_at(last) <= self.value_at(last - 1))
        {
            return Err(GridError::StepTooSmall);
        }
        Ok(())
    }
}

/// Configures and validates [`SamplingGrid`] instances.
///
/// # Examples
/// ```
/// use extrap_core::SamplingGrid;
///
/// let grid = SamplingGrid::builder()
///     .with_start(0.0)
///     .with_step(0.5)
///     .with_points(4)
///     .with_training_dimension(2)
///     .build()?;
/// assert_eq!(grid.values(), vec![0.0, 0.5, 1.0, 1.5]);
/// # Ok::<(), extrap_core::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingGridBuilder {
    start: f64,
    step: f64,
    points: usize,
    training_dimension: usize,
}

impl Default for SamplingGridBuilder {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            step: DEFAULT_STEP,
            points: DEFAULT_POINTS.get(),
            training_dimension: DEFAULT_TRAINING_DIMENSION.get(),
        }
    }
}

impl SamplingGridBuilder {
    /// Creates a builder populated with the default grid parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the first x value.
    #[must_use]
    pub const fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Overrides the spacing between x values.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Overrides the number of x values.
    #[must_use]
    pub const fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Overrides the number of leading points reserved for training.
    #[must_use]
    pub const fn with_training_dimension(mut self, training_dimension: usize) -> Self {
        self.training_dimension = training_dimension;
        self
    }

    /// Validates the configuration and constructs a [`SamplingGrid`].
    ///
    /// # Errors
    /// Returns [`GridError::NonFiniteParameter`] for a NaN or infinite start
    /// or step, [`GridError::NonPositiveStep`] for a step that is not greater
    /// than zero, [`GridError::ZeroPoints`], [`GridError::ZeroTrainingDimension`]
    /// and [`GridError::TrainingDimensionExceedsPoints`] for invalid counts.
    /// A grid whose last value overflows yields
    /// [`GridError::NonFiniteParameter`] for `end`, and one whose step is lost
    /// to rounding against `start` or the last value yields
    /// [`GridError::StepTooSmall`].
    pub fn build(self) -> Result<SamplingGrid, GridError> {
        if !self.start.is_finite() {
            return Err(GridError::NonFiniteParameter { parameter: "start" });
        }
        if !self.step.is_finite() {
            return Err(GridError::NonFiniteParameter { parameter: "step" });
        }
        if self.step <= 0.0 {
            return Err(GridError::NonPositiveStep);
        }
        let points = NonZeroUsize::new(self.points).ok_or(GridError::ZeroPoints)?;
        let training_dimension = NonZeroUsize::new(self.training_dimension)
            .ok_or(GridError::ZeroTrainingDimension)?;
        if training_dimension > points {
            return Err(GridError::TrainingDimensionExceedsPoints {
                training_dimension: training_dimension.get(),
                points: points.get(),
            });
        }
        let grid = SamplingGrid {
            start: self.start,
            step: self.step,
            points,
            training_dimension,
        };
        grid.check_span()?;
        Ok(grid)
    }
}
