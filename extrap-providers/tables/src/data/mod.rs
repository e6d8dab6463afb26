//! Literal simulation output backing the fixed tables.
//!
//! Values are copied verbatim from the converged solver runs; none of them
//! can be regenerated from a formula.

pub(crate) mod imsrg;
pub(crate) mod infinite_matter;
pub(crate) mod pairing;
