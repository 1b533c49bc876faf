//! Card system: definitions, rotation, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: 8×8 ink pattern plus metadata
//! - `CardInfo`: Record of the external card data source
//! - `Rotation`: Quarter-turn applied when a card is placed
//! - `CardCatalog`: Immutable id → card lookup

pub mod definition;
pub mod registry;
pub mod rotation;

pub use definition::{Card, CardId, CardInfo, Rarity};
pub use registry::CardCatalog;
pub use rotation::{rotate, rotate_grid, Rotation};
