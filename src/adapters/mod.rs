//! Adapter implementations of the port traits.
//!
//! - `fs`: reads and writes the on-disk screenshot tree
//! - `memory`: in-memory store for unit tests

pub mod fs;
#[cfg(test)]
pub mod memory;
