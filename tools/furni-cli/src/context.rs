//! Shared command context: the data directory and output handler.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use furni_store::FileBackend;
use furni_storefront::{App, EnvHints, Page};

use crate::output::Output;

const DEFAULT_DATA_DIR: &str = ".furni";

/// Everything a command needs: where state lives and how to talk to
/// the user.
pub struct Context {
    pub output: Output,
    data_dir: PathBuf,
}

impl Context {
    pub fn new(data_dir: Option<&str>, output: Output) -> Self {
        let data_dir = PathBuf::from(data_dir.unwrap_or(DEFAULT_DATA_DIR));
        output.debug(&format!("data dir: {}", data_dir.display()));
        Self { output, data_dir }
    }

    /// Open a storefront page over the persistent data directory.
    pub fn open(&self, page: Page) -> Result<App<FileBackend>> {
        let backend = FileBackend::open(&self.data_dir)
            .with_context(|| format!("opening data dir {}", self.data_dir.display()))?;
        Ok(App::open(backend, page, env_hints()))
    }
}

/// Sample the process environment for first-visit defaults.
fn env_hints() -> EnvHints {
    EnvHints {
        language: std::env::var("LANG").ok(),
        prefers_dark: None,
    }
}
