//! Furni CLI - drive the storefront demo from the terminal.
//!
//! Commands:
//! - `furni catalog` - Browse the product catalog
//! - `furni cart` - Inspect and mutate the persisted cart
//! - `furni lang` - Show or switch the display language
//! - `furni theme` - Show or flip the color theme
//! - `furni view` - Jump to a product on the next listing
//! - `furni login` - Validate demo credentials

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, LangArgs, LoginArgs, ThemeArgs, ViewArgs};

/// Furni CLI - a furniture storefront demo in your terminal
#[derive(Parser)]
#[command(name = "furni")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Data directory for persisted state
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// Inspect and mutate the cart
    Cart(CartArgs),

    /// Show or switch the display language
    Lang(LangArgs),

    /// Show or flip the color theme
    Theme(ThemeArgs),

    /// Jump to a product on the next catalog listing
    View(ViewArgs),

    /// Validate demo credentials
    Login(LoginArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::new(cli.data_dir.as_deref(), output);

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Lang(args) => commands::lang::run(args, &ctx),
        Commands::Theme(args) => commands::theme::run(args, &ctx),
        Commands::View(args) => commands::view::run(args, &ctx),
        Commands::Login(args) => commands::login::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
