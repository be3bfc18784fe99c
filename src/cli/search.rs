//! Search command implementation

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::SearchResult;
use crate::error::{Error, Result};
use crate::output::formatters::truncate;
use crate::output::{json, table};
use crate::viewmodel::CatalogSearchViewModel;

/// Search result for table display
#[derive(Tabled)]
struct ResultDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "BRAND")]
    brand: String,
    #[tabled(rename = "PRODUCT")]
    description: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "PRICE")]
    price: String,
}

impl From<&SearchResult> for ResultDisplay {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id.clone(),
            brand: result.brand_name(),
            description: truncate(&result.product_description(), 48),
            category: result.category.clone().unwrap_or_else(|| "-".to_string()),
            price: result
                .formatted_price()
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the search command
pub async fn run(ctx: &CommandContext, query: &str, suggestions: bool) -> Result<()> {
    let vm = CatalogSearchViewModel::new(ctx.client.clone());

    let results = vm.perform_search(query).await;
    if let Some(message) = vm.error_message().await {
        return Err(Error::Other(message));
    }

    if suggestions {
        return print_suggestions(ctx, &vm).await;
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&results)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ResultDisplay> = results.iter().map(ResultDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Pretty => {
            if results.is_empty() {
                println!("No products match '{query}'.");
                return Ok(());
            }

            for result in &results {
                let price = result
                    .formatted_price()
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "{}  {} {}",
                    result.id.dimmed(),
                    result.brand_name().bold(),
                    result.product_description()
                );
                println!("  {}", price);
            }
            println!("\n{} results", results.len().to_string().bold());
        }
    }

    Ok(())
}

async fn print_suggestions<C: crate::client::CatalogApi + 'static>(
    ctx: &CommandContext,
    vm: &CatalogSearchViewModel<C>,
) -> Result<()> {
    let suggestions = vm.search_suggestions().await;

    match ctx.format {
        OutputFormat::Json => {
            let texts: Vec<serde_json::Value> = suggestions
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "text": s.text,
                        "category": s.category,
                        "product_id": s.product.as_ref().map(|p| p.id.clone()),
                    })
                })
                .collect();
            println!("{}", json::format_json(&texts)?);
        }
        _ => {
            for suggestion in &suggestions {
                match (&suggestion.category, &suggestion.product) {
                    (Some(category), None) => {
                        println!("{} {}", suggestion.text, format!("in {category}").dimmed())
                    }
                    (_, Some(product)) => {
                        println!("{} {}", suggestion.text, product.id.dimmed())
                    }
                    _ => println!("{}", suggestion.text),
                }
            }
        }
    }

    Ok(())
}
