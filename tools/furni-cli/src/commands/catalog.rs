//! `furni catalog` - browse the product catalog.

use anyhow::Result;
use clap::Args;
use furni_commerce::catalog::Catalog;
use furni_commerce::search::{CategoryFilter, ProductFilter};

use crate::context::Context;

#[derive(Args)]
pub struct CatalogArgs {
    /// Filter by name substring (case-insensitive)
    #[arg(short, long)]
    query: Option<String>,

    /// Filter by category: all, sofa, chair, table, bed, lighting, storage
    #[arg(short, long)]
    category: Option<String>,
}

pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let filter = ProductFilter::new(
        args.query.unwrap_or_default(),
        CategoryFilter::parse(args.category.as_deref().unwrap_or("all")),
    );
    let products = catalog.filter(&filter);

    if ctx.output.json_mode() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("no products match");
        return Ok(());
    }

    ctx.output.header("Catalog");
    for p in &products {
        ctx.output.table_row(
            &[
                p.id.as_str(),
                &p.name,
                p.category.as_str(),
                &p.price.display(),
            ],
            &[4, 18, 10, 10],
        );
    }
    Ok(())
}
