//! Detail-view selection: at most one product at a time.

use serde::{Deserialize, Serialize};

use amenities_core::{ProductId, ValueObject};

use crate::catalog::Catalog;
use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState(Option<ProductId>);

impl ValueObject for SelectionState {}

impl SelectionState {
    /// Nothing selected.
    pub fn clear() -> Self {
        Self(None)
    }

    /// Select `id`, replacing any prior selection.
    ///
    /// Ids missing from `catalog` leave the state as it was.
    #[must_use]
    pub fn select(self, catalog: &Catalog, id: &ProductId) -> Self {
        if !catalog.contains(id) {
            tracing::warn!(product_id = %id, "ignoring selection of unknown product");
            return self;
        }
        Self(Some(id.clone()))
    }

    pub fn selected_id(&self) -> Option<&ProductId> {
        self.0.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    /// The selected product, resolved against `catalog`.
    pub fn current<'c>(&self, catalog: &'c Catalog) -> Option<&'c Product> {
        self.0.as_ref().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::tests::record;

    fn catalog() -> Catalog {
        Catalog::from_records([record("aurora-x1"), record("zen-pod")]).unwrap()
    }

    fn id(raw: &str) -> ProductId {
        ProductId::parse(raw).unwrap()
    }

    #[test]
    fn starts_empty() {
        let selection = SelectionState::default();
        assert!(!selection.is_open());
        assert!(selection.current(&catalog()).is_none());
    }

    #[test]
    fn select_existing_product() {
        let catalog = catalog();
        let selection = SelectionState::clear().select(&catalog, &id("zen-pod"));
        assert_eq!(selection.current(&catalog).map(|p| p.name()), Some("Aurora X1"));
        assert_eq!(selection.selected_id(), Some(&id("zen-pod")));
    }

    #[test]
    fn selecting_another_replaces_previous() {
        let catalog = catalog();
        let selection = SelectionState::clear()
            .select(&catalog, &id("aurora-x1"))
            .select(&catalog, &id("zen-pod"));
        assert_eq!(selection.selected_id(), Some(&id("zen-pod")));
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let catalog = catalog();
        let empty = SelectionState::clear().select(&catalog, &id("ghost"));
        assert_eq!(empty, SelectionState::clear());

        let open = SelectionState::clear().select(&catalog, &id("aurora-x1"));
        let after = open.clone().select(&catalog, &id("ghost"));
        assert_eq!(after, open);
    }

    #[test]
    fn clear_is_idempotent() {
        assert_eq!(SelectionState::clear(), SelectionState::clear());
        assert!(!SelectionState::clear().is_open());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: selecting an id outside the catalog never changes `current()`.
            #[test]
            fn unknown_selection_keeps_current(
                prior in prop::option::of(prop::sample::select(vec!["aurora-x1", "zen-pod"])),
                ghost in "[a-z]{1,8}-ghost",
            ) {
                let catalog = catalog();
                let start = match prior {
                    Some(raw) => SelectionState::clear().select(&catalog, &id(raw)),
                    None => SelectionState::clear(),
                };
                let before = start.current(&catalog).cloned();
                let after = start.select(&catalog, &id(&ghost));
                prop_assert_eq!(after.current(&catalog).cloned(), before);
            }
        }
    }
}
