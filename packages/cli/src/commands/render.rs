use super::open_session;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pageforge_render::HtmlOptions;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document key (file name without .json)
    pub key: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Emit compact HTML
    #[arg(long)]
    pub compact: bool,
}

pub async fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = open_session(&config, cwd, &args.key).await?;

    let renderer = config.renderer();
    let options = HtmlOptions {
        pretty: !args.compact,
        ..HtmlOptions::default()
    };
    let html = renderer.to_html_page(&renderer.theme().store_name, session.document(), &options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir(cwd));
    tokio::fs::create_dir_all(&out_dir).await?;
    let output_path = out_dir.join(format!("{}.html", args.key));
    tokio::fs::write(&output_path, html).await?;

    info!(key = %args.key, path = %output_path.display(), "rendered page");
    println!(
        "  {} {} → {}",
        "✓".green(),
        args.key,
        output_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_render_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(
            dir.path().join("pages/home.json"),
            json!({ "sections": [{ "title": "Welcome", "subtitle": "Shop now" }] }).to_string(),
        )
        .unwrap();

        render(
            RenderArgs {
                key: "home".to_string(),
                stdout: false,
                out_dir: None,
                compact: true,
            },
            dir.path(),
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(dir.path().join("dist/home.html")).unwrap();
        assert!(html.contains("data-template=\"hero\""));
        assert!(html.contains("<h1>Welcome</h1>"));
    }

    #[tokio::test]
    async fn test_render_missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = render(
            RenderArgs {
                key: "nope".to_string(),
                stdout: true,
                out_dir: None,
                compact: false,
            },
            dir.path(),
        )
        .await;
        assert!(result.is_err());
    }
}
