//! # Penta Board
//!
//! Board model for pentagame: identifiers, the pentagram geometry, the size
//! resolver, fields, stops and figures. This crate holds no drawing logic; a
//! built [`Board`] is plain data any renderer can consume.

pub mod board;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod kinds;
pub mod palette;
pub mod sizes;

pub use board::*;
pub use elements::*;
pub use error::*;
pub use geometry::*;
pub use kinds::*;
pub use palette::*;
pub use sizes::*;
