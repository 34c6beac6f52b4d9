//! `furni theme` - show or flip the color theme.

use anyhow::Result;
use clap::{Args, Subcommand};
use furni_storefront::Page;

use crate::context::Context;

#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Show the active theme
    Show,
    /// Flip between light and dark
    Toggle,
}

pub fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.open(Page::Home)?;
    match args.command {
        ThemeCommand::Show => {
            ctx.output.kv("theme", app.theme().as_str());
        }
        ThemeCommand::Toggle => {
            app.toggle_theme();
            ctx.output
                .success(&format!("theme set to {}", app.theme().as_str()));
        }
    }
    Ok(())
}
