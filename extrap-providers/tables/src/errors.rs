use thiserror::Error;

/// Errors raised while resolving fixed tables.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TableError {
    /// No fixed table carries the requested name.
    #[error("no fixed table is named `{name}`")]
    UnknownTable {
        /// Name that failed to resolve.
        name: String,
    },
}
