//! A sparse Game of Life simulator.
//!
//! Only live cells are stored, in an open-addressing hash set over grid
//! coordinates, so the world can be as large as the coordinates allow.
//! Snapshots are exchanged as 1-bit BMP images.

mod bmp;
mod error;
mod game;
mod point;
mod set;

pub use bmp::{load_bmp, read_bmp, save_bmp, write_bmp};
pub use error::Error;
pub use game::Game;
pub use point::Point;
pub use set::PointSet;
