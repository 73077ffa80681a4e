use super::open_session;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pageforge_render::Stage;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Document key (file name without .json)
    pub key: String,
}

pub async fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = open_session(&config, cwd, &args.key).await?;
    let renderer = config.renderer();

    println!(
        "{} {} ({} sections)",
        "🔎".bright_blue(),
        args.key.bright_white().bold(),
        session.document().len()
    );

    for (index, node) in session.document().nodes().enumerate() {
        let resolution = renderer.resolve(node.block_type(), node.props());
        let template = match &resolution.template {
            Some(template) => template.to_string().green(),
            None => "(nothing)".dimmed(),
        };
        let stage = match resolution.stage {
            Stage::Unresolved => resolution.stage.to_string().yellow(),
            _ => resolution.stage.to_string().normal(),
        };

        println!(
            "  {:>3}  {:<16} {:<20} {:<16} → {} via {}",
            index,
            node.id().as_str(),
            format!("{:?}", node.block_type()),
            resolution.normalized,
            template,
            stage
        );
    }

    Ok(())
}
