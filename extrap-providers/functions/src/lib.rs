//! Generated-function providers.
//!
//! Each provider samples a closed-form function of `x` over the default
//! [`SamplingGrid`]: 200 points from `-1.0` (inclusive) to `1.0` (exclusive)
//! at a step of `0.01`, with the first 50 points suggested for training.
//! Any parameter values are accepted; NaN and infinite results are returned
//! unchanged and reported through a `warn` event.
//!
//! # Examples
//! ```
//! use extrap_providers_functions::sine;
//!
//! let dataset = sine(2.0, 3.0);
//! assert_eq!(dataset.name(), "Sine");
//! assert_eq!(dataset.len(), 200);
//! assert_eq!(dataset.training_dimension(), 50);
//! ```

mod function;
mod provider;

use extrap_core::{Dataset, SamplingGrid};

pub use function::GeneratedFunction;
pub use provider::FunctionProvider;

/// Samples `y = scale * x + intercept`.
#[must_use]
pub fn linear(scale: f64, intercept: f64) -> Dataset {
    GeneratedFunction::Linear { scale, intercept }.sample(&SamplingGrid::default())
}

/// Samples `y = scale * (x + constant) ^ degree`.
#[must_use]
pub fn polynomial(scale: f64, constant: f64, degree: f64) -> Dataset {
    GeneratedFunction::Polynomial {
        scale,
        constant,
        degree,
    }
    .sample(&SamplingGrid::default())
}

/// Samples `y = scale_out * sin(scale_in * x)`.
#[must_use]
pub fn sine(scale_out: f64, scale_in: f64) -> Dataset {
    GeneratedFunction::Sine {
        scale_out,
        scale_in,
    }
    .sample(&SamplingGrid::default())
}

/// Samples `y = scale_out * cos(scale_in * x)`.
#[must_use]
pub fn cosine(scale_out: f64, scale_in: f64) -> Dataset {
    GeneratedFunction::Cosine {
        scale_out,
        scale_in,
    }
    .sample(&SamplingGrid::default())
}

/// Samples `y = scale_out * tan(scale_in * x)`.
#[must_use]
pub fn tangent(scale_out: f64, scale_in: f64) -> Dataset {
    GeneratedFunction::Tangent {
        scale_out,
        scale_in,
    }
    .sample(&SamplingGrid::default())
}

/// Samples `y = scale_out * atan(scale_in * x)`.
#[must_use]
pub fn arctangent(scale_out: f64, scale_in: f64) -> Dataset {
    GeneratedFunction::Arctangent {
        scale_out,
        scale_in,
    }
    .sample(&SamplingGrid::default())
}
