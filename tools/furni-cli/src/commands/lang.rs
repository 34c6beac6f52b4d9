//! `furni lang` - show or switch the display language.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use furni_i18n::Locale;
use furni_storefront::Page;

use crate::context::Context;

#[derive(Args)]
pub struct LangArgs {
    #[command(subcommand)]
    command: LangCommand,
}

#[derive(Subcommand)]
enum LangCommand {
    /// Show the active language
    Show,
    /// Switch the language (en, ru)
    Set { code: String },
}

pub fn run(args: LangArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.open(Page::Home)?;
    match args.command {
        LangCommand::Show => {
            ctx.output.kv("language", app.locale().as_str());
        }
        LangCommand::Set { code } => {
            if !app.set_locale(&code) {
                let supported: Vec<&str> = Locale::all().iter().map(Locale::as_str).collect();
                bail!(
                    "unsupported language '{code}', expected one of: {}",
                    supported.join(", ")
                );
            }
            ctx.output
                .success(&format!("language set to {}", app.locale().as_str()));
        }
    }
    Ok(())
}
