//! aneura-core
//!
//! Pure domain types — the shared vocabulary of the Aneura system.
//! No scoring logic and no I/O; the form state defined here is what the
//! presentation layer fills in and the score calculators read.

pub mod error;
pub mod form;
