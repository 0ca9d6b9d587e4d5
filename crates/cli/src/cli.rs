//! Command-line surface of the showcase.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use amenities_catalog::{FeatureTag, IndustryTag, TypeFilter};

pub const CATALOG_ENV: &str = "AMENITIES_CATALOG";

/// Browse the Epic Amenities machine catalog.
#[derive(Parser, Debug)]
#[command(name = "amenities", version)]
pub struct Cli {
    /// Catalog JSON to load instead of the built-in catalog
    #[arg(long, global = true, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List machines matching the given filters
    List(ListArgs),

    /// Show the filter options the catalog offers
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view of one machine
    Show {
        /// Product id (e.g. aurora-x1)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file without browsing it
    Validate {
        /// Path to catalog JSON
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Product type, or "All"
    #[arg(long = "type", default_value = "All")]
    pub type_filter: TypeFilter,

    /// Required feature (repeat to require several; all must match)
    #[arg(long = "feature")]
    pub features: Vec<FeatureTag>,

    /// Industry (repeat to widen; any may match)
    #[arg(long = "industry")]
    pub industries: Vec<IndustryTag>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
