//! `furni cart` - inspect and mutate the persisted cart.

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use furni_commerce::cart::{AddOutcome, ClearOutcome, PersistStatus};
use furni_commerce::ids::ProductId;
use furni_storefront::Page;

use crate::context::Context;

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    command: CartCommand,
}

#[derive(Subcommand)]
enum CartCommand {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a product
    Add { id: String },
    /// Remove a product's line entirely
    Remove { id: String },
    /// Increase a line's quantity by one
    Inc { id: String },
    /// Decrease a line's quantity by one (stops at 1)
    Dec { id: String },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.open(Page::Cart)?;

    match args.command {
        CartCommand::Show => {
            let cart = app.cart();
            if ctx.output.json_mode() {
                ctx.output.json(&*cart);
                return Ok(());
            }
            if cart.is_empty() {
                ctx.output.info(app.lookup("cart_empty"));
                return Ok(());
            }
            ctx.output.header(app.lookup("cart_title"));
            for line in cart.lines() {
                let total = line
                    .total()
                    .map(|m| m.display())
                    .unwrap_or_else(|_| "-".into());
                ctx.output.table_row(
                    &[
                        line.id.as_str(),
                        &line.name,
                        &format!("x{}", line.qty),
                        &total,
                    ],
                    &[4, 18, 4, 10],
                );
            }
            let totals = cart.totals()?;
            ctx.output.kv("items", &totals.item_count.to_string());
            ctx.output
                .kv(app.lookup("subtotal"), &totals.subtotal.display());
            return Ok(());
        }
        CartCommand::Add { id } => match app.add_to_cart(&ProductId::new(id)) {
            AddOutcome::Added(status) => warn_if_memory_only(ctx, status),
            AddOutcome::NotFound => {}
        },
        CartCommand::Remove { id } => {
            let status = app.remove_from_cart(&ProductId::new(id));
            warn_if_memory_only(ctx, status);
        }
        CartCommand::Inc { id } => {
            let status = app.increment_qty(&ProductId::new(id));
            warn_if_memory_only(ctx, status);
        }
        CartCommand::Dec { id } => {
            let status = app.decrement_qty(&ProductId::new(id));
            warn_if_memory_only(ctx, status);
        }
        CartCommand::Clear { yes } => {
            let prompt = app.lookup("confirm_clear").to_string();
            let outcome = app.clear_cart(|| {
                yes || Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()
                    .unwrap_or(false)
            });
            match outcome {
                ClearOutcome::Cleared(status) => warn_if_memory_only(ctx, status),
                ClearOutcome::Declined => {
                    ctx.output.info("cart left unchanged");
                    return Ok(());
                }
            }
        }
    }

    for toast in app.take_toasts() {
        ctx.output.info(&toast.message);
    }
    let count = app.cart().totals().map(|t| t.item_count).unwrap_or(0);
    ctx.output.kv("items in cart", &count.to_string());
    Ok(())
}

fn warn_if_memory_only(ctx: &Context, status: PersistStatus) {
    if status == PersistStatus::MemoryOnly {
        ctx.output
            .warn("storage unavailable, change not persisted beyond this run");
    }
}
