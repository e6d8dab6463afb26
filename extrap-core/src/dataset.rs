//! The dataset record shared by every provider.

use std::{borrow::Cow, num::NonZeroUsize};

use crate::error::{Axis, DatasetError, Result};

/// A named sequence of `(x, y)` samples with a suggested training prefix.
///
/// The first [`Dataset::training_dimension`] points are meant for training and
/// the remainder for evaluation or extrapolation. Tables embedded in the
/// binary are borrowed, so cloning them never copies their values.
///
/// # Examples
/// ```
/// use extrap_core::Dataset;
///
/// let dataset = Dataset::try_new("ramp", 2, vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0])?;
/// assert_eq!(dataset.name(), "ramp");
/// assert_eq!(dataset.len(), 3);
///
/// let (training, evaluation) = dataset.split();
/// assert_eq!(training.x_values(), &[0.0, 1.0]);
/// assert_eq!(evaluation.y_values(), &[5.0]);
/// # Ok::<(), extrap_core::DatasetError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    name: Cow<'static, str>,
    training_dimension: NonZeroUsize,
    x_values: Cow<'static, [f64]>,
    y_values: Cow<'static, [f64]>,
}

impl Dataset {
    /// Builds a dataset after checking its invariants.
    ///
    /// # Errors
    /// Returns [`DatasetError::LengthMismatch`] when `x_values` and `y_values`
    /// differ in length, [`DatasetError::EmptyData`] when both are empty,
    /// [`DatasetError::ZeroTrainingDimension`] for a zero training dimension
    /// and [`DatasetError::TrainingDimensionExceedsLength`] when the training
    /// prefix is longer than the data.
    pub fn try_new(
        name: impl Into<Cow<'static, str>>,
        training_dimension: usize,
        x_values: impl Into<Cow<'static, [f64]>>,
        y_values: impl Into<Cow<'static, [f64]>>,
    ) -> Result<Self> {
        let xs = x_values.into();
        let ys = y_values.into();
        if xs.len() != ys.len() {
            return Err(DatasetError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(DatasetError::EmptyData);
        }
        let training =
            NonZeroUsize::new(training_dimension).ok_or(DatasetError::ZeroTrainingDimension)?;
        if training.get() > xs.len() {
            return Err(DatasetError::TrainingDimensionExceedsLength {
                training_dimension,
                len: xs.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            training_dimension: training,
            x_values: xs,
            y_values: ys,
        })
    }

    /// Wraps static tables without copying them.
    ///
    /// Intended for `static` items, where a violated invariant stops
    /// compilation.
    ///
    /// # Panics
    /// Panics when the tables differ in length, when `training_dimension` is
    /// zero or when it exceeds the table length.
    ///
    /// # Examples
    /// ```
    /// use extrap_core::Dataset;
    ///
    /// static X: [f64; 3] = [1.0, 2.0, 3.0];
    /// static Y: [f64; 3] = [0.5, 0.25, 0.125];
    /// static HALVING: Dataset = Dataset::from_static("halving", 2, &X, &Y);
    ///
    /// assert_eq!(HALVING.training_dimension(), 2);
    /// assert_eq!(HALVING.y_values(), &Y);
    /// ```
    #[must_use]
    pub const fn from_static(
        name: &'static str,
        training_dimension: usize,
        x_values: &'static [f64],
        y_values: &'static [f64],
    ) -> Self {
        assert!(
            x_values.len() == y_values.len(),
            "static x and y tables must have equal length"
        );
        let Some(training) = NonZeroUsize::new(training_dimension) else {
            panic!("static training dimension must be at least 1");
        };
        assert!(
            training.get() <= x_values.len(),
            "static training dimension exceeds table length"
        );
        Self {
            name: Cow::Borrowed(name),
            training_dimension: training,
            x_values: Cow::Borrowed(x_values),
            y_values: Cow::Borrowed(y_values),
        }
    }

    /// Builds a dataset whose invariants the caller has already established.
    pub(crate) fn from_checked_parts(
        name: Cow<'static, str>,
        training_dimension: NonZeroUsize,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(x_values.len(), y_values.len());
        debug_assert!(training_dimension.get() <= x_values.len());
        Self {
            name,
            training_dimension,
            x_values: Cow::Owned(x_values),
            y_values: Cow::Owned(y_values),
        }
    }

    /// Returns the human-readable dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the suggested number of leading points used for training.
    #[must_use]
    pub const fn training_dimension(&self) -> usize {
        self.training_dimension.get()
    }

    /// Returns the independent variable samples.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Returns the dependent variable samples.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Always `false`; a dataset holds at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Iterates over `(x, y)` pairs in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }

    /// Splits the points at the training dimension into training and
    /// evaluation views.
    ///
    /// The evaluation view is empty when the whole dataset is used for
    /// training.
    #[must_use]
    pub fn split(&self) -> (Samples<'_>, Samples<'_>) {
        let (training_x, evaluation_x) = self.x_values.split_at(self.training_dimension());
        let (training_y, evaluation_y) = self.y_values.split_at(self.training_dimension());
        (
            Samples {
                x_values: training_x,
                y_values: training_y,
            },
            Samples {
                x_values: evaluation_x,
                y_values: evaluation_y,
            },
        )
    }

    /// Checks that every value is finite.
    ///
    /// Providers return NaN and infinite values unchanged; callers that cannot
    /// train on them use this to reject such datasets.
    ///
    /// # Errors
    /// Returns [`DatasetError::NonFiniteValue`] for the first offending value,
    /// scanning x before y.
    pub fn ensure_finite(&self) -> Result<()> {
        for (axis, values) in [(Axis::X, self.x_values()), (Axis::Y, self.y_values())] {
            if let Some(index) = values.iter().position(|value| !value.is_finite()) {
                return Err(DatasetError::NonFiniteValue { axis, index });
            }
        }
        Ok(())
    }

    /// Consumes the dataset and returns `(name, training_dimension, x, y)`.
    #[must_use]
    pub fn into_parts(self) -> (String, usize, Vec<f64>, Vec<f64>) {
        (
            self.name.into_owned(),
            self.training_dimension.get(),
            self.x_values.into_owned(),
            self.y_values.into_owned(),
        )
    }
}

/// A borrowed run of consecutive points from a [`Dataset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Samples<'a> {
    x_values: &'a [f64],
    y_values: &'a [f64],
}

impl<'a> Samples<'a> {
    /// Returns the x values in this run.
    #[must_use]
    pub const fn x_values(&self) -> &'a [f64] {
        self.x_values
    }

    /// Returns the y values in this run.
    #[must_use]
    pub const fn y_values(&self) -> &'a [f64] {
        self.y_values
    }

    /// Returns the number of points in this run.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Returns whether the run holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static X: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
    static Y: [f64; 4] = [2.0, 4.0, 6.0, 8.0];
    static DOUBLING: Dataset = Dataset::from_static("doubling", 3, &X, &Y);

    #[test]
    fn static_dataset_borrows_tables() {
        let cloned = DOUBLING.clone();
        assert!(matches!(cloned.x_values, Cow::Borrowed(_)));
        assert!(matches!(cloned.y_values, Cow::Borrowed(_)));
        assert_eq!(cloned, DOUBLING);
    }

    #[test]
    fn split_covers_every_point() {
        let (training, evaluation) = DOUBLING.split();
        assert_eq!(training.len(), 3);
        assert_eq!(evaluation.len(), 1);
        assert_eq!(evaluation.x_values(), &[4.0]);
        assert_eq!(evaluation.y_values(), &[8.0]);
    }

    #[test]
    fn split_leaves_empty_evaluation_when_fully_trained() {
        let dataset =
            Dataset::try_new("full", 2, vec![0.0, 1.0], vec![0.0, 1.0]).expect("valid dataset");
        let (training, evaluation) = dataset.split();
        assert_eq!(training.len(), 2);
        assert!(evaluation.is_empty());
    }

    #[test]
    fn checked_parts_become_owned() {
        let dataset = Dataset::from_checked_parts(
            Cow::Borrowed("owned"),
            NonZeroUsize::MIN,
            vec![0.0],
            vec![1.0],
        );
        assert!(matches!(dataset.x_values, Cow::Owned(_)));
        assert_eq!(dataset.points().collect::<Vec<_>>(), vec![(0.0, 1.0)]);
    }
}
