//! Command execution. Output goes to the supplied writer so it can be captured.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use amenities_catalog::{
    Catalog, FeatureTag, IndustryTag, Product, ProductId, Reducer, Showcase, ShowcaseAction,
    TypeFilter,
};

use crate::cli::{Cli, Command, ListArgs};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Command::List(args) => list(&load_catalog(catalog_path)?, args, out),
        Command::Options { json } => options(&load_catalog(catalog_path)?, json, out),
        Command::Show { id, json } => show(&load_catalog(catalog_path)?, &id, json, out),
        Command::Validate { path } => validate(&path, out),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => read_catalog(path),
        None => Catalog::builtin().context("built-in catalog is invalid"),
    }
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    Catalog::from_json_str(&json).with_context(|| format!("invalid catalog {}", path.display()))
}

/// The filter flags, expressed as the actions a visitor would take.
///
/// Repeated flags are collapsed first; toggling a tag twice would deselect it.
fn filter_actions(args: &ListArgs) -> Vec<ShowcaseAction> {
    let features: BTreeSet<FeatureTag> = args.features.iter().copied().collect();
    let industries: BTreeSet<IndustryTag> = args.industries.iter().copied().collect();

    std::iter::once(ShowcaseAction::SetType(args.type_filter))
        .chain(features.into_iter().map(ShowcaseAction::ToggleFeature))
        .chain(industries.into_iter().map(ShowcaseAction::ToggleIndustry))
        .collect()
}

fn list(catalog: &Catalog, args: ListArgs, out: &mut impl Write) -> Result<()> {
    let showcase = Showcase::new(catalog).reduce_all(&filter_actions(&args));
    let view = showcase.view();

    if args.json {
        return write_json(out, &view);
    }

    writeln!(out, "{} curated solutions", view.count)?;
    for product in &view.visible {
        let features: Vec<_> = product.card_features().iter().map(|f| f.as_str()).collect();
        writeln!(
            out,
            "{:<14} {:<22} {:<12} {} [{}]",
            product.id_typed(),
            product.name(),
            product.product_type(),
            stars(product),
            features.join(", ")
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterOptions {
    types: Vec<TypeFilter>,
    features: Vec<FeatureTag>,
    industries: Vec<IndustryTag>,
}

fn options(catalog: &Catalog, json: bool, out: &mut impl Write) -> Result<()> {
    let options = FilterOptions {
        types: TypeFilter::options().collect(),
        features: catalog.feature_options(),
        industries: catalog.industry_options(),
    };

    if json {
        return write_json(out, &options);
    }

    writeln!(out, "Product type:  {}", join(&options.types))?;
    writeln!(out, "Feature stack: {}", join(&options.features))?;
    writeln!(out, "Industries:    {}", join(&options.industries))?;
    Ok(())
}

fn show(catalog: &Catalog, raw_id: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let id: ProductId = raw_id.parse()?;
    let showcase = Showcase::new(catalog).reduce(&ShowcaseAction::Select(id));
    let Some(product) = showcase.view().detail else {
        bail!("no product with id `{raw_id}`");
    };

    if json {
        return write_json(out, product);
    }

    writeln!(out, "{} · {}", product.model_code(), product.product_type())?;
    writeln!(out, "{}", product.name())?;
    writeln!(out, "{}", product.description())?;
    writeln!(out)?;
    for stat in product.stats() {
        writeln!(out, "  {:<18} {}", stat.label, stat.value)?;
    }
    writeln!(out)?;
    writeln!(out, "Feature architecture: {}", join(product.features()))?;
    writeln!(out, "Optimized industries: {}", join(product.industries()))?;
    writeln!(out, "Rating:               {}", stars(product))?;
    Ok(())
}

fn validate(path: &Path, out: &mut impl Write) -> Result<()> {
    let catalog = read_catalog(path)?;
    writeln!(out, "{}: {} products OK", path.display(), catalog.len())?;
    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn stars(product: &Product) -> String {
    let rating = product.rating();
    let filled = usize::from(rating.filled_stars());
    format!("{}{} {rating}", "★".repeat(filled), "☆".repeat(5 - filled))
}
