// lib.rs -- starblitz-common: shared foundation for the starblitz workspace
//
// Holds everything both the simulation crate and a frontend need to agree
// on: the atlas/UV resolver and the small shared helpers (2D distance,
// injectable random source).

pub mod atlas;
pub mod shared;

pub use atlas::{Atlas, AtlasError, UvMapping};
pub use shared::{dist, RandSource, RngSource};
