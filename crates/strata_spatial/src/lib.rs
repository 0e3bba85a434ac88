//! # STRATA Spatial
//!
//! Camera-centered clipmap index over a chunk set.
//!
//! ## Architecture
//!
//! ```text
//! camera ─► floor to cell ─► per level: snap to voxel size
//!                                 │
//!                 unchanged ◄─────┴─────► slid: mark entering slabs
//!                 (no work)                     (or the whole level)
//!                                 │
//!                          drain: version += 1 ─► DirtyBrick list
//! ```
//!
//! Level `i` has voxel size `base << i` and the same window resolution, so
//! each level covers twice the extent of the previous one. Bricks are stored
//! in a ring per level and never reallocated on camera motion.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod index;
pub mod level;
pub mod snap;
pub mod stats;

pub use config::{ClipmapConfig, MAX_LEVEL_COUNT};
pub use index::ClipmapIndex;
pub use level::ClipmapLevel;
pub use stats::{ChunkQuery, DirtyBrick, SpatialQueryStats};
