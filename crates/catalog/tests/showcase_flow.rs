//! End-to-end browsing flows over the built-in catalog.

use amenities_catalog::{
    Catalog, FeatureTag, FilterState, IndustryTag, ProductId, ProductType, Reducer, Showcase,
    ShowcaseAction, TypeFilter,
};

fn builtin() -> Catalog {
    Catalog::builtin().expect("built-in catalog must validate")
}

fn ids(view: &amenities_catalog::ShowcaseView<'_>) -> Vec<String> {
    view.visible.iter().map(|p| p.id_typed().to_string()).collect()
}

#[test]
fn builtin_catalog_offers_only_tags_in_use() {
    let catalog = builtin();

    let features = catalog.feature_options();
    assert!(!features.is_empty());
    for tag in &features {
        assert!(catalog.iter().any(|p| p.has_feature(*tag)));
    }
    // Options come back in vocabulary order.
    assert!(features.windows(2).all(|w| w[0] < w[1]));

    let industries = catalog.industry_options();
    assert!(industries.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn builtin_catalog_ids_are_unique() {
    let catalog = builtin();
    let mut seen: Vec<&ProductId> = catalog.iter().map(|p| p.id_typed()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn visitor_narrows_then_opens_details() {
    let catalog = builtin();
    let showcase = Showcase::new(&catalog).reduce_all(&[
        ShowcaseAction::SetType(TypeFilter::Only(ProductType::Refreshment)),
        ShowcaseAction::ToggleFeature(FeatureTag::Cashless),
        ShowcaseAction::ToggleIndustry(IndustryTag::University),
    ]);

    let view = showcase.view();
    assert_eq!(ids(&view), ["aurora-x1", "campus-flow"]);
    assert_eq!(view.count, 2);

    let target = view.visible[1].id_typed().clone();
    let showcase = showcase.reduce(&ShowcaseAction::Select(target.clone()));
    let detail = showcase.view().detail.expect("detail view open");
    assert_eq!(detail.id_typed(), &target);
    assert_eq!(detail.name(), "Campus Flow");
}

#[test]
fn feature_and_industry_policies_differ() {
    let catalog = builtin();

    let both_features = FilterState::reset()
        .toggle_feature(FeatureTag::AiInventory)
        .toggle_feature(FeatureTag::Compact);
    let visible: Vec<_> = catalog.filter(&both_features).iter().map(|p| p.id_typed().to_string()).collect();
    assert_eq!(visible, ["zen-pod"]);

    let either_industry = FilterState::reset()
        .toggle_industry(IndustryTag::Transport)
        .toggle_industry(IndustryTag::Hospitality);
    let visible: Vec<_> = catalog.filter(&either_industry).iter().map(|p| p.id_typed().to_string()).collect();
    assert_eq!(visible, ["nova-hybrid", "transit-edge", "lumen-suite"]);
}

#[test]
fn reset_restores_the_full_grid() {
    let catalog = builtin();
    let showcase = Showcase::new(&catalog).reduce_all(&[
        ShowcaseAction::ToggleFeature(FeatureTag::OutdoorRated),
        ShowcaseAction::ResetFilters,
        ShowcaseAction::ResetFilters,
    ]);
    assert_eq!(showcase.view().count, catalog.len());
}

#[test]
fn catalog_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Catalog>();
}
