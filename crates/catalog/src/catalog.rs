//! Catalog store: the validated, read-only product list.

use amenities_core::entity::first_duplicate_id;
use amenities_core::ProductId;

use crate::error::CatalogError;
use crate::filter::{self, FilterState};
use crate::product::{Product, ProductRecord};
use crate::tags::{FeatureTag, IndustryTag};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Ordered, immutable product catalog.
///
/// Product ids are unique and every tag belongs to its closed vocabulary; both
/// are checked on construction. There are no mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        if let Some(id) = first_duplicate_id(&products) {
            return Err(CatalogError::DuplicateProductId(id));
        }
        Ok(Self { products })
    }

    pub fn from_records(
        records: impl IntoIterator<Item = ProductRecord>,
    ) -> Result<Self, CatalogError> {
        let products = records
            .into_iter()
            .map(Product::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_products(products)
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let catalog = Self::from_records(records)?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog compiled into this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products visible under `state`, in catalog order.
    pub fn filter(&self, state: &FilterState) -> Vec<&Product> {
        filter::filter_products(self, state)
    }

    /// Feature tags carried by at least one product, in vocabulary order.
    pub fn feature_options(&self) -> Vec<FeatureTag> {
        filter::feature_options(self)
    }

    /// Industry tags carried by at least one product, in vocabulary order.
    pub fn industry_options(&self) -> Vec<IndustryTag> {
        filter::industry_options(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
