//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod color;
pub mod details;
pub mod display;
pub mod element;
pub mod error;
pub mod ids;
pub mod urls;

pub use catalog::{CatalogEntry, CatalogPage};
pub use color::{ItemStyle, Paint, Rgb};
pub use details::{
    AbilitySlot, ItemDetails, MoveSlot, NamedResource, StatSlot, TypeSlot,
};
pub use display::DisplayItem;
pub use element::ElementType;
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use urls::ImageUrlTemplate;
