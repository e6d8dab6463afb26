//! Error types for the extrap core library.
//!
//! Defines the error enums exposed by the public API, their stable codes and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Identifies which sequence of a [`crate::Dataset`] a value belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    /// The independent variable.
    X,
    /// The dependent variable.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// An error produced while building or checking a [`crate::Dataset`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DatasetError {
    /// The x and y sequences had different lengths.
    #[error("x has {x} values but y has {y}")]
    LengthMismatch {
        /// Number of x values supplied.
        x: usize,
        /// Number of y values supplied.
        y: usize,
    },
    /// The dataset contained no points.
    #[error("dataset contains no points")]
    EmptyData,
    /// The training dimension was zero.
    #[error("training dimension must be at least 1")]
    ZeroTrainingDimension,
    /// The training dimension exceeded the number of points.
    #[error("training dimension {training_dimension} exceeds dataset length {len}")]
    TrainingDimensionExceedsLength {
        /// Requested training dimension.
        training_dimension: usize,
        /// Number of points available.
        len: usize,
    },
    /// A value was NaN or infinite.
    #[error("{axis} value at index {index} is not finite")]
    NonFiniteValue {
        /// Sequence holding the offending value.
        axis: Axis,
        /// Zero-based position of the offending value.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// The x and y sequences had different lengths.
        LengthMismatch => LengthMismatch { .. } => "DATASET_LENGTH_MISMATCH",
        /// The dataset contained no points.
        EmptyData => EmptyData => "DATASET_EMPTY",
        /// The training dimension was zero.
        ZeroTrainingDimension => ZeroTrainingDimension => "DATASET_ZERO_TRAINING_DIMENSION",
        /// The training dimension exceeded the number of points.
        TrainingDimensionExceedsLength => TrainingDimensionExceedsLength { .. }
            => "DATASET_TRAINING_DIMENSION_EXCEEDS_LENGTH",
        /// A value was NaN or infinite.
        NonFiniteValue => NonFiniteValue { .. } => "DATASET_NON_FINITE_VALUE",
    }
}

/// Error returned when a [`crate::SamplingGrid`] configuration is invalid.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    /// A floating-point parameter was NaN or infinite.
    #[error("grid parameter `{parameter}` must be finite")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// The step was zero or negative.
    #[error("grid step must be greater than zero")]
    NonPositiveStep,
    /// The step vanished when added to a grid value, repeating x values.
    #[error("grid step is too small to separate neighbouring values")]
    StepTooSmall,
    /// The grid had no points.
    #[error("grid must contain at least one point")]
    ZeroPoints,
    /// The training dimension was zero.
    #[error("grid training dimension must be at least 1")]
    ZeroTrainingDimension,
    /// The training dimension exceeded the number of points.
    #[error("grid training dimension {training_dimension} exceeds point count {points}")]
    TrainingDimensionExceedsPoints {
        /// Requested training dimension.
        training_dimension: usize,
        /// Configured number of points.
        points: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GridError`] variants.
    enum GridErrorCode for GridError {
        /// A floating-point parameter was NaN or infinite.
        NonFiniteParameter => NonFiniteParameter { .. } => "GRID_NON_FINITE_PARAMETER",
        /// The step was zero or negative.
        NonPositiveStep => NonPositiveStep => "GRID_NON_POSITIVE_STEP",
        /// The step vanished when added to a grid value.
        StepTooSmall => StepTooSmall => "GRID_STEP_TOO_SMALL",
        /// The grid had no points.
        ZeroPoints => ZeroPoints => "GRID_ZERO_POINTS",
        /// The training dimension was zero.
        ZeroTrainingDimension => ZeroTrainingDimension => "GRID_ZERO_TRAINING_DIMENSION",
        /// The training dimension exceeded the number of points.
        TrainingDimensionExceedsPoints => TrainingDimensionExceedsPoints { .. }
            => "GRID_TRAINING_DIMENSION_EXCEEDS_POINTS",
    }
}

/// Convenient alias for results returned by the dataset API.
pub type Result<T> = core::result::Result<T, DatasetError>;
