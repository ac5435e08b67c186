//! Shared kernel for the book publishing workspace.
//!
//! Holds the storage-level aggregate identity and the validated primitive
//! wrappers that every other crate builds on.

pub mod types;
pub mod validated;

pub use types::AggregateId;
pub use validated::{NonEmptyString, NonNegativeInt, PositiveInt, ValidationError};
