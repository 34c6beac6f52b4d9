//! `furni login` - validate demo credentials.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use furni_storefront::auth::REDIRECT_DELAY_MS;
use furni_storefront::Page;

use crate::context::Context;

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    email: String,
    /// Account password
    #[arg(short, long)]
    password: String,
}

pub fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.open(Page::Login)?;
    if let Err(e) = app.submit_login(&args.email, &args.password) {
        bail!("{}", app.lookup(e.message_key()));
    }
    ctx.output.info(app.lookup("success_login"));
    thread::sleep(Duration::from_millis(REDIRECT_DELAY_MS));
    ctx.output.success("welcome back");
    Ok(())
}
