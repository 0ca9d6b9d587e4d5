use thiserror::Error;

use amenities_core::{DomainError, ProductId};

use crate::tags::UnknownTag;

/// Catalog load failure.
///
/// Every variant is raised while building a [`Catalog`](crate::Catalog); once a
/// catalog exists, nothing in it can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("duplicate product id `{0}`")]
    DuplicateProductId(ProductId),

    #[error("product `{product}`: {source}")]
    UnknownTag {
        product: String,
        #[source]
        source: UnknownTag,
    },

    #[error("product `{product}` lists {tag} more than once")]
    DuplicateTag { product: ProductId, tag: String },

    #[error("product `{product}`: invalid {field}: {reason}")]
    InvalidField {
        product: String,
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    pub(crate) fn invalid_field(
        product: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            product: product.into(),
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
