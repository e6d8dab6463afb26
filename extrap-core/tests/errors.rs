//! Stable error codes exposed by the core library.

use extrap_core::{Axis, DatasetError, DatasetErrorCode, GridError, GridErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    DatasetError::LengthMismatch { x: 2, y: 3 },
    DatasetErrorCode::LengthMismatch,
    "DATASET_LENGTH_MISMATCH",
)]
#[case(DatasetError::EmptyData, DatasetErrorCode::EmptyData, "DATASET_EMPTY")]
#[case(
    DatasetError::ZeroTrainingDimension,
    DatasetErrorCode::ZeroTrainingDimension,
    "DATASET_ZERO_TRAINING_DIMENSION",
)]
#[case(
    DatasetError::TrainingDimensionExceedsLength { training_dimension: 5, len: 4 },
    DatasetErrorCode::TrainingDimensionExceedsLength,
    "DATASET_TRAINING_DIMENSION_EXCEEDS_LENGTH",
)]
#[case(
    DatasetError::NonFiniteValue { axis: Axis::Y, index: 7 },
    DatasetErrorCode::NonFiniteValue,
    "DATASET_NON_FINITE_VALUE",
)]
fn returns_expected_dataset_code(
    #[case] error: DatasetError,
    #[case] expected: DatasetErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case(
    GridError::NonFiniteParameter { parameter: "step" },
    GridErrorCode::NonFiniteParameter,
    "GRID_NON_FINITE_PARAMETER",
)]
#[case(GridError::NonPositiveStep, GridErrorCode::NonPositiveStep, "GRID_NON_POSITIVE_STEP")]
#[case(GridError::StepTooSmall, GridErrorCode::StepTooSmall, "GRID_STEP_TOO_SMALL")]
#[case(GridError::ZeroPoints, GridErrorCode::ZeroPoints, "GRID_ZERO_POINTS")]
#[case(
    GridError::ZeroTrainingDimension,
    GridErrorCode::ZeroTrainingDimension,
    "GRID_ZERO_TRAINING_DIMENSION",
)]
#[case(
    GridError::TrainingDimensionExceedsPoints { training_dimension: 9, points: 3 },
    GridErrorCode::TrainingDimensionExceedsPoints,
    "GRID_TRAINING_DIMENSION_EXCEEDS_POINTS",
)]
fn returns_expected_grid_code(
    #[case] error: GridError,
    #[case] expected: GridErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
}

#[rstest]
#[case(DatasetError::LengthMismatch { x: 2, y: 3 }, "x has 2 values but y has 3")]
#[case(
    DatasetError::NonFiniteValue { axis: Axis::X, index: 4 },
    "x value at index 4 is not finite",
)]
#[case(
    DatasetError::TrainingDimensionExceedsLength { training_dimension: 5, len: 4 },
    "training dimension 5 exceeds dataset length 4",
)]
fn dataset_errors_render_context(#[case] error: DatasetError, #[case] message: &str) {
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn grid_errors_name_the_parameter() {
    let error = GridError::NonFiniteParameter { parameter: "start" };
    assert_eq!(error.to_string(), "grid parameter `start` must be finite");
}
