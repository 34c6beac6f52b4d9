//! `furni view` - jump to a product on the next catalog listing.

use anyhow::Result;
use clap::Args;
use furni_commerce::ids::ProductId;
use furni_storefront::scroll::{HIGHLIGHT_DURATION_MS, SCROLL_DELAY_MS};
use furni_storefront::Page;

use crate::context::Context;

#[derive(Args)]
pub struct ViewArgs {
    /// Product id to highlight
    id: String,
}

pub fn run(args: ViewArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.open(Page::Home)?;
    let id = ProductId::new(args.id);
    app.view_product(&id);

    // Reopen as the products page and consume the handoff, the way a
    // navigation would.
    let mut products = ctx.open(Page::Products)?;
    match products.take_pending_scroll() {
        Some(target) => {
            ctx.output
                .success(&format!("products page will highlight {target}"));
            ctx.output.debug(&format!(
                "scroll after {SCROLL_DELAY_MS}ms, highlight for {HIGHLIGHT_DURATION_MS}ms"
            ));
        }
        None => ctx.output.info("no pending highlight"),
    }
    Ok(())
}
