//! Configuration loader and schema types.
//!
//! This module exposes the settings schema that drives a scan and helpers to
//! load it from the environment and an optional file on disk.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
