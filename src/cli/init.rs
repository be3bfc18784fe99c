//! Init command implementation

use std::path::PathBuf;

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::{CatalogApi, HttpCatalogClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command: prompt for a catalog base URL, verify it by
/// fetching the remote config, and save the local configuration.
pub async fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to Shelf!".bold().green());
    println!("Let's point it at a product catalog.\n");

    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog base URL")
        .validate_with(|input: &String| {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://")
            }
        })
        .interact_text()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Checking the catalog...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = HttpCatalogClient::new(base_url.clone())?;
    let result = client.fetch_config().await;
    spinner.finish_and_clear();
    let remote = result?;

    match remote.version {
        Some(ref version) => println!(
            "{} Reached catalog (config version {})",
            "✓".green(),
            version.bold()
        ),
        None => println!("{} Reached catalog", "✓".green()),
    }

    let formats = ["pretty", "table", "json"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&formats)
        .default(0)
        .interact()?;

    let config = Config {
        base_url: Some(base_url),
        preferences: crate::config::Preferences {
            format: Some(formats[selection].to_string()),
        },
    };

    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_path()?,
    };
    config.save_to(path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List catalog categories", "shelf categories".cyan());
    println!("  {} - Search for products", "shelf search drill".cyan());

    Ok(())
}
