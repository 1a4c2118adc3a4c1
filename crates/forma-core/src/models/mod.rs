//! Built-in domain models exposed as collections.
//!
//! Each struct maps to one collection (lowercase type name) and registers a
//! type descriptor so its schema can be generated by name. Nullable fields
//! are `Option`; fields are serialized in camelCase with the identifier
//! under `_id`.

mod cascade;
mod offer;
mod purchase_product;
mod requirement_condition;
mod reward;
mod skin;
mod step;
mod tile;

pub use cascade::Cascade;
pub use offer::Offer;
pub use purchase_product::PurchaseProduct;
pub use requirement_condition::RequirementCondition;
pub use reward::Reward;
pub use skin::Skin;
pub use step::{Step, StepGroup};
pub use tile::{Tile, TileWeight};
