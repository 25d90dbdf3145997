//! # Penta Layout
//!
//! Builds pentagame boards. Given a scale, the builder resolves every size,
//! places the corners, junctions and the three stop rings, and hands back a
//! [`penta_board::Board`] a renderer can draw headlessly.
//!
//! ## Core Components
//!
//! - **builder**: Places every element of the board for one scale
//! - **snapshot**: Imports remote game state onto a built board
//! - **config**: TOML board configuration
//! - **telemetry**: `tracing` subscriber setup

pub mod builder;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod telemetry;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use snapshot::*;
