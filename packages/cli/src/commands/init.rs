use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Documents directory
    #[arg(short, long, default_value = "pages")]
    pub documents_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pageforge project...".bright_blue().bold());

    let documents_dir = cwd.join(&args.documents_dir);
    if !documents_dir.exists() {
        fs::create_dir_all(&documents_dir)?;
        println!("  {} Created {}/", "✓".green(), args.documents_dir);
    }

    let sample = documents_dir.join("home.json");
    if !sample.exists() {
        fs::write(&sample, serde_json::to_string_pretty(&sample_document())?)?;
        println!("  {} Created home.json", "✓".green());
    }

    let config = Config {
        documents_dir: args.documents_dir.clone(),
        out_dir: Some("dist".to_string()),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/home.json", args.documents_dir);
    println!("  2. Run: pageforge render home");
    println!("  3. Check output in dist/");

    Ok(())
}

fn sample_document() -> serde_json::Value {
    json!({
        "sections": [
            {
                "type": "navigation",
                "logo": "My Store",
                "links": [
                    { "label": "Home", "href": "#" },
                    { "label": "Shop", "href": "#products" }
                ]
            },
            {
                "type": "hero",
                "title": "Welcome to our store",
                "subtitle": "Discover products you'll love",
                "buttonText": "Shop now",
                "buttonLink": "#products"
            },
            {
                "type": "products",
                "title": "Featured products",
                "items": [
                    { "name": "Product 1", "price": 29.99 },
                    { "name": "Product 2", "price": 39.99 }
                ]
            },
            { "type": "footer", "companyName": "My Store" }
        ]
    })
}
