//! Codec implementations for the wire types.

pub mod arrays;
pub mod map;
pub mod primitives;
pub mod text;
pub mod tuple;
