//! Extrap core library.
//!
//! Defines the [`Dataset`] record, the [`DatasetProvider`] contract and the
//! [`SamplingGrid`] used by generated datasets. Provider crates build on these
//! types; nothing here performs I/O or retains state between calls.

mod dataset;
mod error;
mod grid;
mod provider;

pub use crate::{
    dataset::{Dataset, Samples},
    error::{Axis, DatasetError, DatasetErrorCode, GridError, GridErrorCode, Result},
    grid::{SamplingGrid, SamplingGridBuilder},
    provider::DatasetProvider,
};
