//! TCG Catalog - read-only trading card catalog
//!
//! Fetches sets, cards, attacks and abilities from a hosted backend,
//! reconciles the two attack record shapes the backend stores into one
//! normalized form, and derives card image URLs.

pub mod catalog;
pub mod core;
pub mod error;
pub mod image;
pub mod loader;
pub mod normalize;

pub use catalog::{CardTile, CardView, Catalog, SetView};
pub use error::{CatalogError, Result};
pub use image::card_image_url;
pub use normalize::{normalize_attack, normalize_attacks};
