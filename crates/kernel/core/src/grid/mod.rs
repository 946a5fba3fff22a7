//! Tile coordinates and eight-way compass math.
//!
//! All functions here are pure and total. The sign convention is pinned in
//! [`direction_to`]: smaller `y` is north, larger `x` is east.

mod direction;
mod position;

pub use direction::{Direction, direction_to, step, step_raw};
pub use position::Position;
