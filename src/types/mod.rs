//! Core shared types.

pub mod direction;

pub use direction::Direction;
