//! Featured command implementation

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::CatalogApi;
use crate::error::Result;
use crate::output::formatters::format_price;
use crate::output::json;

/// Run the featured command
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let remote = ctx.client.fetch_config().await?;
    if !remote.feature_enabled("featured_content") {
        println!("Featured content is disabled for this catalog.");
        return Ok(());
    }

    let content = ctx.client.fetch_featured_content().await?;
    let sections = content.sections();

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&sections)?);
        }
        _ => {
            if sections.is_empty() {
                println!("No featured content.");
                return Ok(());
            }

            for section in sections {
                let title = section.title.as_deref().unwrap_or("Featured");
                println!("{}", title.bold());
                if let Some(ref subtitle) = section.subtitle {
                    println!("{}", subtitle.dimmed());
                }
                for product in &section.products {
                    println!(
                        "  {}  {}  {}",
                        product.id.dimmed(),
                        product.title,
                        format_price(product.price.as_ref())
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}
