//! DrawingML (DML) encoding.
//!
//! Maps drawing shapes and their styling to DrawingML element trees: unit
//! conversion, placement transforms, fills, outlines and geometry.

pub mod fill;
pub mod geometry;
pub mod shape;
pub mod xfrm;

pub use shape::{encode_shape, encode_shapes};
