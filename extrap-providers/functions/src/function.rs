//! Closed-form functions sampled into synthetic datasets.

use extrap_core::{Dataset, SamplingGrid};
use tracing::{instrument, warn};

/// A closed-form `y = f(x)` together with its parameters.
///
/// # Examples
/// ```
/// use extrap_providers_functions::GeneratedFunction;
///
/// let line = GeneratedFunction::Linear { scale: 2.0, intercept: 3.0 };
/// assert_eq!(line.name(), "Linear");
/// assert_eq!(line.evaluate(-1.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeneratedFunction {
    /// `y = scale * x + intercept`.
    Linear {
        /// Slope.
        scale: f64,
        /// Value at `x = 0`.
        intercept: f64,
    },
    /// `y = scale * (x + constant) ^ degree`.
    ///
    /// The degree may be fractional; a negative base then yields NaN.
    Polynomial {
        /// Factor applied after exponentiation.
        scale: f64,
        /// Shift added to `x` before exponentiation.
        constant: f64,
        /// Exponent.
        degree: f64,
    },
    /// `y = scale_out * sin(scale_in * x)`.
    Sine {
        /// Amplitude.
        scale_out: f64,
        /// Angular frequency.
        scale_in: f64,
    },
    /// `y = scale_out * cos(scale_in * x)`.
    Cosine {
        /// Amplitude.
        scale_out: f64,
        /// Angular frequency.
        scale_in: f64,
    },
    /// `y = scale_out * tan(scale_in * x)`.
    Tangent {
        /// Factor applied to the tangent.
        scale_out: f64,
        /// Factor applied to `x`.
        scale_in: f64,
    },
    /// `y = scale_out * atan(scale_in * x)`.
    Arctangent {
        /// Factor applied to the arctangent.
        scale_out: f64,
        /// Factor applied to `x`.
        scale_in: f64,
    },
}

impl GeneratedFunction {
    /// Returns the name given to datasets sampled from this function.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "Linear",
            Self::Polynomial { .. } => "Polynomial",
            Self::Sine { .. } => "Sine",
            Self::Cosine { .. } => "Cosine",
            Self::Tangent { .. } => "Tangent",
            Self::Arctangent { .. } => "Arctangent",
        }
    }

    /// Evaluates the function at `x`.
    ///
    /// Results are returned as computed, including NaN and infinities.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "closed-form evaluation")]
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Linear { scale, intercept } => scale * x + intercept,
            Self::Polynomial {
                scale,
                constant,
                degree,
            } => scale * (x + constant).powf(degree),
            Self::Sine {
                scale_out,
                scale_in,
            } => scale_out * (scale_in * x).sin(),
            Self::Cosine {
                scale_out,
                scale_in,
            } => scale_out * (scale_in * x).cos(),
            Self::Tangent {
                scale_out,
                scale_in,
            } => scale_out * (scale_in * x).tan(),
            Self::Arctangent {
                scale_out,
                scale_in,
            } => scale_out * (scale_in * x).atan(),
        }
    }

    /// Samples the function over `grid`.
    ///
    /// Non-finite samples are kept; a warning reports how many there were.
    #[instrument(
        name = "functions.sample",
        skip(self, grid),
        fields(
            function = self.name(),
            points = grid.points(),
            training_dimension = grid.training_dimension(),
        ),
    )]
    #[must_use]
    pub fn sample(&self, grid: &SamplingGrid) -> Dataset {
        let dataset = grid.sample(self.name(), |x| self.evaluate(x));
        let non_finite = dataset
            .y_values()
            .iter()
            .filter(|value| !value.is_finite())
            .count();
        if non_finite > 0 {
            warn!(
                function = self.name(),
                non_finite, "sampled function produced non-finite values"
            );
        }
        dataset
    }
}
