pub mod add;
pub mod init;
pub mod inspect;
pub mod render;

pub use add::{add, AddArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use render::{render, RenderArgs};

use crate::config::Config;
use pageforge_editor::{EditSession, EditorError};
use std::path::Path;

/// Load `key` from the configured documents directory
async fn open_session(config: &Config, cwd: &Path, key: &str) -> Result<EditSession, EditorError> {
    let mut session = EditSession::with_max_history(key, config.history_depth());
    session.load_from(&config.store(cwd)).await?;
    Ok(session)
}
