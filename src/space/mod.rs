//! Search-space primitives: points, intervals and bounding boxes.
//!
//! A point is a plain `&[f64]` / `Vec<f64>`; its dimensionality is fixed
//! for a run and must agree with every box it is tested against.

mod bounds;

pub use bounds::{BoundingBox, Interval};
