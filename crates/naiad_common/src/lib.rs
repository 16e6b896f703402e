//! Shared foundational types used across the Naiad placement-and-routing engine.
//!
//! This crate provides the common result type for internal invariant
//! violations and the small array/enumeration utilities (cross products,
//! unique pair enumeration) used by the constraint encoders.

#![warn(missing_docs)]

pub mod array;
pub mod result;

pub use array::{cross, unique_pairs};
pub use result::{InternalError, NaiadResult};
