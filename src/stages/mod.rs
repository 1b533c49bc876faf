//! Stage layouts and the grid-text codec.
//!
//! ## Key Types
//!
//! - `StageId`: Identifier for stage layouts
//! - `Stage`: Initial board plus metadata
//! - `StageCatalog`: Immutable id → stage lookup

pub mod definition;
pub mod registry;
pub mod text;

pub use definition::{Stage, StageId, StageInfo};
pub use registry::StageCatalog;
pub use text::{parse_grid, print_grid};
