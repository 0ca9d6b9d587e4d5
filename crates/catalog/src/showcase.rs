//! Showcase session: one visitor browsing one catalog.

use serde::Serialize;

use amenities_core::{ProductId, Reducer};

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::product::Product;
use crate::selection::SelectionState;
use crate::tags::{FeatureTag, IndustryTag, TypeFilter};

/// User action on the product showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseAction {
    SetType(TypeFilter),
    ToggleFeature(FeatureTag),
    ToggleIndustry(IndustryTag),
    ResetFilters,
    Select(ProductId),
    ClearSelection,
}

impl ShowcaseAction {
    pub fn name(&self) -> &'static str {
        match self {
            ShowcaseAction::SetType(_) => "showcase.filter.type",
            ShowcaseAction::ToggleFeature(_) => "showcase.filter.feature",
            ShowcaseAction::ToggleIndustry(_) => "showcase.filter.industry",
            ShowcaseAction::ResetFilters => "showcase.filter.reset",
            ShowcaseAction::Select(_) => "showcase.selection.select",
            ShowcaseAction::ClearSelection => "showcase.selection.clear",
        }
    }
}

/// Filter and selection state bound to a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase<'c> {
    catalog: &'c Catalog,
    filters: FilterState,
    selection: SelectionState,
}

impl<'c> Showcase<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            selection: SelectionState::default(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Everything the presentation layer renders for the current state.
    pub fn view(&self) -> ShowcaseView<'c> {
        let visible = self.catalog.filter(&self.filters);
        ShowcaseView {
            count: visible.len(),
            visible,
            type_options: TypeFilter::options().collect(),
            feature_options: self.catalog.feature_options(),
            industry_options: self.catalog.industry_options(),
            filters: self.filters.clone(),
            detail: self.selection.current(self.catalog),
        }
    }
}

impl Reducer for Showcase<'_> {
    type Action = ShowcaseAction;

    fn reduce(self, action: &ShowcaseAction) -> Self {
        tracing::debug!(action = action.name(), ?action, "applying showcase action");

        let Showcase {
            catalog,
            filters,
            selection,
        } = self;

        let (filters, selection) = match action {
            ShowcaseAction::SetType(type_filter) => (filters.with_type(*type_filter), selection),
            ShowcaseAction::ToggleFeature(tag) => (filters.toggle_feature(*tag), selection),
            ShowcaseAction::ToggleIndustry(tag) => (filters.toggle_industry(*tag), selection),
            ShowcaseAction::ResetFilters => (FilterState::reset(), selection),
            ShowcaseAction::Select(id) => (filters, selection.select(catalog, id)),
            ShowcaseAction::ClearSelection => (filters, SelectionState::clear()),
        };

        Showcase {
            catalog,
            filters,
            selection,
        }
    }
}

/// Render model for one frame of the showcase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseView<'c> {
    pub visible: Vec<&'c Product>,
    /// "N curated solutions".
    pub count: usize,
    pub type_options: Vec<TypeFilter>,
    pub feature_options: Vec<FeatureTag>,
    pub industry_options: Vec<IndustryTag>,
    pub filters: FilterState,
    pub detail: Option<&'c Product>,
}
