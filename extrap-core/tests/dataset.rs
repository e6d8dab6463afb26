#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests for dataset construction and inspection.

use extrap_core::{Axis, Dataset, DatasetError};
use rstest::{fixture, rstest};

#[fixture]
fn ramp() -> Dataset {
    Dataset::try_new("ramp", 2, vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0])
        .expect("valid dataset")
}

#[rstest]
fn accessors_expose_inputs(ramp: Dataset) {
    assert_eq!(ramp.name(), "ramp");
    assert_eq!(ramp.training_dimension(), 2);
    assert_eq!(ramp.len(), 4);
    assert!(!ramp.is_empty());
    assert_eq!(ramp.x_values(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(ramp.y_values(), &[1.0, 3.0, 5.0, 7.0]);
}

#[rstest]
#[case::length_mismatch(
    2,
    vec![0.0, 1.0],
    vec![0.0],
    DatasetError::LengthMismatch { x: 2, y: 1 },
)]
#[case::empty(1, vec![], vec![], DatasetError::EmptyData)]
#[case::zero_training(0, vec![0.0], vec![1.0], DatasetError::ZeroTrainingDimension)]
#[case::training_too_long(
    3,
    vec![0.0, 1.0],
    vec![1.0, 2.0],
    DatasetError::TrainingDimensionExceedsLength { training_dimension: 3, len: 2 },
)]
fn try_new_rejects_invalid_input(
    #[case] training_dimension: usize,
    #[case] x_values: Vec<f64>,
    #[case] y_values: Vec<f64>,
    #[case] expected: DatasetError,
) {
    let err = Dataset::try_new("invalid", training_dimension, x_values, y_values)
        .expect_err("invalid input must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn try_new_accepts_borrowed_tables() {
    static X: [f64; 2] = [0.5, 1.5];
    static Y: [f64; 2] = [2.0, 4.0];
    let dataset = Dataset::try_new("borrowed", 1, &X[..], &Y[..]).expect("valid dataset");
    assert_eq!(dataset.x_values(), &X);
    assert_eq!(dataset.y_values(), &Y);
}

#[rstest]
fn points_pair_values_in_order(ramp: Dataset) {
    let points: Vec<(f64, f64)> = ramp.points().collect();
    assert_eq!(points, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
    assert_eq!(ramp.points().len(), 4);
}

#[rstest]
fn split_divides_at_training_dimension(ramp: Dataset) {
    let (training, evaluation) = ramp.split();
    assert_eq!(training.x_values(), &[0.0, 1.0]);
    assert_eq!(training.y_values(), &[1.0, 3.0]);
    assert_eq!(evaluation.x_values(), &[2.0, 3.0]);
    assert_eq!(evaluation.y_values(), &[5.0, 7.0]);
    assert_eq!(training.len() + evaluation.len(), ramp.len());
}

#[rstest]
fn into_parts_returns_owned_fields(ramp: Dataset) {
    let (name, training_dimension, x_values, y_values) = ramp.into_parts();
    assert_eq!(name, "ramp");
    assert_eq!(training_dimension, 2);
    assert_eq!(x_values, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(y_values, vec![1.0, 3.0, 5.0, 7.0]);
}

#[rstest]
fn ensure_finite_accepts_finite_data(ramp: Dataset) {
    assert_eq!(ramp.ensure_finite(), Ok(()));
}

#[rstest]
#[case::nan_x(vec![0.0, f64::NAN], vec![1.0, 2.0], Axis::X, 1)]
#[case::infinite_y(vec![0.0, 1.0], vec![f64::NEG_INFINITY, 2.0], Axis::Y, 0)]
#[case::x_scanned_first(vec![0.0, f64::INFINITY], vec![f64::NAN, 2.0], Axis::X, 1)]
fn ensure_finite_reports_first_offender(
    #[case] x_values: Vec<f64>,
    #[case] y_values: Vec<f64>,
    #[case] axis: Axis,
    #[case] index: usize,
) {
    let dataset = Dataset::try_new("odd", 1, x_values, y_values).expect("shape is valid");
    assert_eq!(
        dataset.ensure_finite(),
        Err(DatasetError::NonFiniteValue { axis, index })
    );
}

#[rstest]
fn clones_compare_equal(ramp: Dataset) {
    let copy = ramp.clone();
    assert_eq!(copy, ramp);
}
