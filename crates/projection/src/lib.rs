//! Coordinate reference system transformations.
//!
//! Implements cylindrical map projections from scratch without external
//! dependencies.

pub mod cylindrical;

pub use cylindrical::{
    gudermannian, inverse_gudermannian, Cylindrical, UnknownProjection, MAX_LATITUDE,
};
