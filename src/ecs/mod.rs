//! Entity identity for component stores
//!
//! Light components are keyed by entities that the application owns.
//! The registry hands out identifiers; component lifetime stays with the
//! stores that attach data to them.

pub mod entity;

pub use entity::{Entity, EntityRegistry};
