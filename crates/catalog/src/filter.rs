//! Filter engine.
//!
//! Matching policy per product:
//! - type: `All`, or the product's type equals the selected type;
//! - features: a product must carry **every** selected feature (AND);
//! - industries: a product must serve **at least one** selected industry (OR).
//!
//! An empty tag set places no constraint. Results keep catalog order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use amenities_core::ValueObject;

use crate::catalog::Catalog;
use crate::product::Product;
use crate::tags::{FeatureTag, IndustryTag, ProductType, TypeFilter};

/// Current filter selections of one session.
///
/// Transitions consume the state and return the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub feature_filters: BTreeSet<FeatureTag>,
    pub industry_filters: BTreeSet<IndustryTag>,
}

impl ValueObject for FilterState {}

impl FilterState {
    /// Session-start state: all types, no tags.
    pub fn reset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(self, type_filter: impl Into<TypeFilter>) -> Self {
        Self {
            type_filter: type_filter.into(),
            ..self
        }
    }

    #[must_use]
    pub fn toggle_feature(mut self, tag: FeatureTag) -> Self {
        toggle(&mut self.feature_filters, tag);
        self
    }

    #[must_use]
    pub fn toggle_industry(mut self, tag: IndustryTag) -> Self {
        toggle(&mut self.industry_filters, tag);
        self
    }

    /// True when a reset would leave the state unchanged.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_type(product.product_type())
            && self.matches_features(product)
            && self.matches_industries(product)
    }

    fn matches_type(&self, product_type: ProductType) -> bool {
        self.type_filter.matches(product_type)
    }

    fn matches_features(&self, product: &Product) -> bool {
        self.feature_filters.iter().all(|tag| product.has_feature(*tag))
    }

    fn matches_industries(&self, product: &Product) -> bool {
        self.industry_filters.is_empty()
            || self.industry_filters.iter().any(|tag| product.serves_industry(*tag))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, tag: T) {
    if !set.remove(&tag) {
        set.insert(tag);
    }
}

pub fn filter_products<'c>(catalog: &'c Catalog, state: &FilterState) -> Vec<&'c Product> {
    catalog.iter().filter(|product| state.matches(product)).collect()
}

pub fn feature_options(catalog: &Catalog) -> Vec<FeatureTag> {
    FeatureTag::ALL
        .iter()
        .copied()
        .filter(|tag| catalog.iter().any(|p| p.has_feature(*tag)))
        .collect()
}

pub fn industry_options(catalog: &Catalog) -> Vec<IndustryTag> {
    IndustryTag::ALL
        .iter()
        .copied()
        .filter(|tag| catalog.iter().any(|p| p.serves_industry(*tag)))
        .collect()
}
