//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the rendering core and an
//! external system. Implementations live in `src/adapters/`.

pub mod image_store;

pub use image_store::{ImageStore, SourceImage};
