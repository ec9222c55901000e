//! Utils

use clap::Parser;

use crate::config::StorefrontConfig;

/// Arguments for the storefront example
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the catalog and fill a cart", long_about = None)]
pub struct ExampleStorefrontArgs {
    /// Catalog view to show (all, newest, latest)
    #[clap(short, long)]
    pub filter: Option<String>,

    /// Product id to add to the cart, may be repeated
    #[clap(short, long)]
    pub add: Vec<u32>,

    /// Quantity update as `ID=QUANTITY`, may be repeated
    #[clap(short, long)]
    pub set: Vec<String>,

    /// Product id to remove from the cart, may be repeated
    #[clap(short, long)]
    pub remove: Vec<u32>,

    /// Storefront settings.
    #[command(flatten)]
    pub config: StorefrontConfig,
}
