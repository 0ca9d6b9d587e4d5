//! Product catalog domain for the Epic Amenities showcase.
//!
//! This crate holds the catalog store, the filter engine and the detail-view
//! selection, implemented purely as deterministic domain logic (no IO beyond
//! parsing content, no rendering).

pub mod catalog;
pub mod error;
pub mod filter;
pub mod product;
pub mod selection;
pub mod showcase;
pub mod tags;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::FilterState;
pub use product::{HexColor, Product, ProductRecord, Rating, Stat};
pub use selection::SelectionState;
pub use showcase::{Showcase, ShowcaseAction, ShowcaseView};
pub use tags::{FeatureTag, IndustryTag, ProductType, TypeFilter, UnknownTag};

pub use amenities_core::{ProductId, Reducer};
