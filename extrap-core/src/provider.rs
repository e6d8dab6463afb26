//! The provider contract shared by fixed tables and generated functions.

use crate::dataset::Dataset;

/// A named, side-effect free source of one [`Dataset`].
///
/// Fixed-table providers return the same embedded data on every call;
/// generated-function providers evaluate their formula over a sampling grid.
/// In both cases calling [`dataset`](Self::dataset) twice yields identical
/// results.
///
/// # Examples
/// ```
/// use extrap_core::{Dataset, DatasetProvider};
///
/// struct Constant(f64);
///
/// impl DatasetProvider for Constant {
///     fn name(&self) -> &str { "constant" }
///     fn dataset(&self) -> Dataset {
///         extrap_core::SamplingGrid::default().sample("constant", |_| self.0)
///     }
/// }
///
/// let provider = Constant(4.0);
/// assert_eq!(provider.name(), "constant");
/// assert_eq!(provider.training_dimension(), 50);
/// assert!(provider.dataset().y_values().iter().all(|&y| y == 4.0));
/// ```
pub trait DatasetProvider {
    /// Returns the name carried by the produced dataset.
    fn name(&self) -> &str;

    /// Produces the dataset.
    fn dataset(&self) -> Dataset;

    /// Returns the suggested training prefix length.
    ///
    /// The default implementation builds the dataset and reads it back.
    /// Providers that know the value up front should override it.
    #[must_use]
    fn training_dimension(&self) -> usize {
        self.dataset().training_dimension()
    }
}
