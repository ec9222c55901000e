//! Storefront Example
//!
//! This example shows a catalog view and a cart driven from the command line.
//!
//! Use `-f` to pick a catalog view (`all`, `newest`, `latest`)
//! Use `-a` to add a product to the cart by id
//! Use `-s ID=QUANTITY` to set a line quantity (zero or less removes it)
//! Use `-r` to remove a product from the cart

use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::warn;

use storefront::{
    cart::{CartStore, parse_quantity},
    catalog::{FilterKey, ProductCatalog},
    fixtures::STOREFRONT_SET,
    logging::init_subscriber,
    products::ProductId,
    receipt::Receipt,
    utils::ExampleStorefrontArgs,
};

/// Whether the slide-in cart panel is showing. Presentation state only; the
/// cart itself knows nothing about it.
#[derive(Debug, Default)]
struct CartPanel {
    open: bool,
}

impl CartPanel {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

fn parse_set(arg: &str) -> Result<(ProductId, i64)> {
    let Some((id, quantity)) = arg.split_once('=') else {
        bail!("expected ID=QUANTITY, got {arg}");
    };

    let id = id
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid product id in {arg}"))?;

    Ok((ProductId::new(id), parse_quantity(quantity)?))
}

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleStorefrontArgs::parse();

    init_subscriber(&args.config.logging)?;

    let catalog = if args.config.catalog == STOREFRONT_SET {
        ProductCatalog::storefront()?
    } else {
        args.config.fixture().load_catalog(&args.config.catalog)?
    };

    let filter = FilterKey::from_param(args.filter.as_deref());

    println!("{}\n", filter.title());

    for product in catalog.view(filter) {
        println!(
            "  [{}] {:<24} {:>12}  {}",
            product.id, product.name, product.price, product.date_added
        );
    }

    let mut cart = CartStore::new(catalog.currency());
    let mut panel = CartPanel::default();

    for id in args.add.into_iter().map(ProductId::new) {
        match catalog.product(id) {
            Some(product) => {
                cart.add(product)?;
            }
            None => warn!(product = %id, "unknown product id"),
        }
    }

    for arg in &args.set {
        let (id, quantity) = parse_set(arg)?;

        cart.update_quantity(id, quantity)?;
    }

    for id in args.remove.into_iter().map(ProductId::new) {
        cart.remove_item(id);
    }

    if !cart.is_empty() {
        panel.open();
    }

    println!("\nCart ({})", cart.item_count());

    if panel.open {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        Receipt::from_cart(&cart)?.write_to(&mut handle)?;

        panel.close();
    }

    Ok(())
}
