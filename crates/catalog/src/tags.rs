//! Closed vocabularies: product types, feature tags and industry tags.
//!
//! Declaration order is the fixed display order. `Ord` follows it, so a
//! `BTreeSet` of tags iterates in the same order the filter bar shows them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not name a member of one of the closed vocabularies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in fixed display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| UnknownTag {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|member| member.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

closed_vocabulary! {
    /// Machine family.
    ProductType, "product type" {
        Refreshment => "Refreshment",
        Hybrid => "Hybrid",
        Wellness => "Wellness",
        Specialty => "Specialty",
    }
}

closed_vocabulary! {
    /// Capability a machine advertises.
    FeatureTag, "feature tag" {
        AiInventory => "AI Inventory",
        Touchless => "Touchless",
        BiometricAccess => "Biometric Access",
        Sustainability => "Sustainability",
        EnergySaver => "Energy Saver",
        Cashless => "Cashless",
        PremiumExperience => "Premium Experience",
        RoundTheClockSupport => "24/7 Support",
        Compact => "Compact",
        OutdoorRated => "Outdoor Rated",
    }
}

closed_vocabulary! {
    /// Deployment vertical a machine is tuned for.
    IndustryTag, "industry tag" {
        Corporate => "Corporate",
        Fitness => "Fitness",
        University => "University",
        Hospitality => "Hospitality",
        Transport => "Transport",
        Healthcare => "Healthcare",
    }
}

/// Type filter: every type, or exactly one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(ProductType),
}

impl TypeFilter {
    const ALL_LABEL: &'static str = "All";

    /// The type filter buttons, in display order ("All" first).
    pub fn options() -> impl Iterator<Item = TypeFilter> {
        core::iter::once(TypeFilter::All).chain(ProductType::ALL.iter().copied().map(TypeFilter::Only))
    }

    pub fn matches(self, product_type: ProductType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => wanted == product_type,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::All => Self::ALL_LABEL,
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

impl From<ProductType> for TypeFilter {
    fn from(value: ProductType) -> Self {
        TypeFilter::Only(value)
    }
}

impl core::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(TypeFilter::All);
        }
        s.parse::<ProductType>().map(TypeFilter::Only).map_err(|mut err| {
            err.kind = "type filter";
            err.expected = format!("{}, {}", Self::ALL_LABEL, err.expected);
            err
        })
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = UnknownTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order_matches_declaration() {
        let labels: Vec<_> = FeatureTag::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels.first(), Some(&"AI Inventory"));
        assert_eq!(labels.last(), Some(&"Outdoor Rated"));
        assert_eq!(labels.len(), 10);
        assert!(FeatureTag::AiInventory < FeatureTag::OutdoorRated);
    }

    #[test]
    fn industry_order_matches_declaration() {
        let labels: Vec<_> = IndustryTag::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            labels,
            ["Corporate", "Fitness", "University", "Hospitality", "Transport", "Healthcare"]
        );
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("24/7 support".parse::<FeatureTag>().unwrap(), FeatureTag::RoundTheClockSupport);
        assert_eq!(" Fitness ".parse::<IndustryTag>().unwrap(), IndustryTag::Fitness);
    }

    #[test]
    fn unknown_label_lists_expected_members() {
        let err = "Vape Lounge".parse::<IndustryTag>().unwrap_err();
        assert_eq!(err.kind, "industry tag");
        assert!(err.to_string().contains("Corporate"));
        assert!(err.to_string().contains("Vape Lounge"));
    }

    #[test]
    fn type_filter_parses_all_and_types() {
        assert_eq!("All".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "wellness".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(ProductType::Wellness)
        );
        let err = "Snack".parse::<TypeFilter>().unwrap_err();
        assert!(err.expected.starts_with("All, "));
    }

    #[test]
    fn type_filter_options_start_with_all() {
        let labels: Vec<_> = TypeFilter::options().map(TypeFilter::as_str).collect();
        assert_eq!(labels, ["All", "Refreshment", "Hybrid", "Wellness", "Specialty"]);
    }

    #[test]
    fn serde_uses_display_labels() {
        assert_eq!(serde_json::to_string(&FeatureTag::EnergySaver).unwrap(), "\"Energy Saver\"");
        assert_eq!(serde_json::to_string(&TypeFilter::All).unwrap(), "\"All\"");
        let parsed: TypeFilter = serde_json::from_str("\"Hybrid\"").unwrap();
        assert_eq!(parsed, TypeFilter::Only(ProductType::Hybrid));
    }
}
