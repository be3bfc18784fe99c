//! Status command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and cache state
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "Shelf Configuration Status".bold());

    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_path()?,
    };

    match Config::load_from(path.clone()) {
        Ok(config) => {
            println!("Config file: {}", path.display().to_string().cyan());
            println!();

            match config.base_url {
                Some(ref url) => println!("{} Catalog base URL: {}", "✓".green(), url),
                None => {
                    println!("{} Catalog base URL not configured", "✗".red());
                    println!("  → Run 'shelf init' or pass --base-url");
                }
            }

            match config.preferences.format {
                Some(ref format) => {
                    println!("{} Default output format: {}", "✓".green(), format)
                }
                None => println!("{} No default output format set", "○".dimmed()),
            }
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "shelf init".cyan()
            );
        }
    }

    println!();
    match CacheStorage::open().and_then(|cache| cache.stats()) {
        Ok(stats) => {
            println!(
                "{} Response cache: {} valid entries, {} expired",
                "✓".green(),
                stats.valid_entries,
                stats.expired_entries
            );
        }
        Err(_) => println!("{} Response cache unavailable", "○".dimmed()),
    }
    println!();

    Ok(())
}
