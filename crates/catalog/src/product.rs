use serde::{Deserialize, Serialize};

use amenities_core::{Entity, ProductId};

use crate::error::CatalogError;
use crate::tags::{FeatureTag, IndustryTag, ProductType};

/// How many features a product card previews.
pub const CARD_FEATURE_PREVIEW: usize = 4;

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// Headline figure shown on cards and in the detail view (e.g. "SKU capacity").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Customer rating in `0.0..=5.0`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    pub fn new(value: f32) -> Option<Self> {
        (value.is_finite() && (0.0..=MAX_RATING).contains(&value)).then_some(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Number of filled stars on a five-star strip.
    pub fn filled_stars(self) -> u8 {
        self.0.floor() as u8
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// `#RRGGBB` color used by the 3D preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix('#')?;
        (digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
            .then(|| Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product record exactly as it appears in catalog content.
///
/// Tags and type are plain strings here; [`Product::from_record`] checks them
/// against the closed vocabularies so errors can name the product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub name: String,
    pub model_code: String,
    pub headline: String,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub features: Vec<String>,
    pub industries: Vec<String>,
    pub rating: f32,
    pub hero_color: String,
    pub accent_color: String,
}

/// A vending machine in the catalog. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    #[serde(rename = "type")]
    product_type: ProductType,
    name: String,
    model_code: String,
    headline: String,
    description: String,
    stats: Vec<Stat>,
    features: Vec<FeatureTag>,
    industries: Vec<IndustryTag>,
    rating: Rating,
    hero_color: HexColor,
    accent_color: HexColor,
}

impl Product {
    /// Validate a raw content record.
    pub fn from_record(record: ProductRecord) -> Result<Self, CatalogError> {
        let id = ProductId::parse(record.id.clone())?;
        let label = record.id;

        let product_type = record
            .product_type
            .parse::<ProductType>()
            .map_err(|source| CatalogError::UnknownTag {
                product: label.clone(),
                source,
            })?;

        let name = required_text(&label, "name", record.name)?;
        let model_code = required_text(&label, "modelCode", record.model_code)?;
        let headline = required_text(&label, "headline", record.headline)?;
        let description = required_text(&label, "description", record.description)?;

        for stat in &record.stats {
            if stat.label.trim().is_empty() || stat.value.trim().is_empty() {
                return Err(CatalogError::invalid_field(
                    &label,
                    "stats",
                    "stat label and value must be non-empty",
                ));
            }
        }

        let features = parse_tags::<FeatureTag>(&id, &label, &record.features)?;
        let industries = parse_tags::<IndustryTag>(&id, &label, &record.industries)?;

        let rating = Rating::new(record.rating).ok_or_else(|| {
            CatalogError::invalid_field(
                &label,
                "rating",
                format!("{} is outside 0.0..={MAX_RATING}", record.rating),
            )
        })?;

        let hero_color = parse_color(&label, "heroColor", &record.hero_color)?;
        let accent_color = parse_color(&label, "accentColor", &record.accent_color)?;

        Ok(Self {
            id,
            product_type,
            name,
            model_code,
            headline,
            description,
            stats: record.stats,
            features,
            industries,
            rating,
            hero_color,
            accent_color,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_code(&self) -> &str {
        &self.model_code
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Features in the order the content lists them.
    pub fn features(&self) -> &[FeatureTag] {
        &self.features
    }

    pub fn industries(&self) -> &[IndustryTag] {
        &self.industries
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn hero_color(&self) -> &HexColor {
        &self.hero_color
    }

    pub fn accent_color(&self) -> &HexColor {
        &self.accent_color
    }

    pub fn has_feature(&self, tag: FeatureTag) -> bool {
        self.features.contains(&tag)
    }

    pub fn serves_industry(&self, tag: IndustryTag) -> bool {
        self.industries.contains(&tag)
    }

    /// Features shown on the product card.
    pub fn card_features(&self) -> &[FeatureTag] {
        &self.features[..self.features.len().min(CARD_FEATURE_PREVIEW)]
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn required_text(product: &str, field: &'static str, value: String) -> Result<String, CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_field(product, field, "must not be empty"));
    }
    Ok(value)
}

fn parse_color(product: &str, field: &'static str, raw: &str) -> Result<HexColor, CatalogError> {
    HexColor::parse(raw)
        .ok_or_else(|| CatalogError::invalid_field(product, field, format!("`{raw}` is not #RRGGBB")))
}

fn parse_tags<T>(id: &ProductId, label: &str, raw: &[String]) -> Result<Vec<T>, CatalogError>
where
    T: core::str::FromStr<Err = crate::tags::UnknownTag> + PartialEq + core::fmt::Display,
{
    let mut tags: Vec<T> = Vec::with_capacity(raw.len());
    for value in raw {
        let tag = value.parse::<T>().map_err(|source| CatalogError::UnknownTag {
            product: label.to_string(),
            source,
        })?;
        if tags.contains(&tag) {
            return Err(CatalogError::DuplicateTag {
                product: id.clone(),
                tag: tag.to_string(),
            });
        }
        tags.push(tag);
    }
    Ok(tags)
}
