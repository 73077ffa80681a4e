use super::open_session;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pageforge_editor::{palette, EditSession, EditorError, StoreError};
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Document key (file name without .json)
    pub key: String,

    /// Palette block type (hero, footer, products...)
    pub block_type: String,

    /// Insert position, appended when omitted
    #[arg(long)]
    pub at: Option<usize>,
}

/// Insert a palette block into a stored page and save it
pub async fn add(args: AddArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = config.store(cwd);

    let mut session = match open_session(&config, cwd, &args.key).await {
        Ok(session) => session,
        Err(EditorError::Load {
            source: StoreError::NotFound(_),
            ..
        }) => {
            println!("  {} Creating {}", "✓".green(), args.key);
            EditSession::with_max_history(args.key.as_str(), config.history_depth())
        }
        Err(err) => return Err(err.into()),
    };

    if !palette::is_known(&args.block_type) {
        println!(
            "  {} '{}' is not a palette block, using the {} template",
            "⚠️".yellow(),
            args.block_type,
            palette::FALLBACK_BLOCK_TYPE
        );
    }

    let composer = session.composer_mut();
    let id = match args.at {
        Some(index) => composer.insert_from_palette_at(&args.block_type, index),
        None => composer.insert_from_palette(&args.block_type),
    }
    .ok_or_else(|| anyhow!("could not insert '{}'", args.block_type))?;

    session.save_to(&store).await?;
    println!("  {} Added {} ({})", "✓".green(), args.block_type, id);

    Ok(())
}
