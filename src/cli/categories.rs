//! Categories command implementation

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::CatalogApi;
use crate::client::models::CategorySummary;
use crate::error::Result;
use crate::output::{json, table};

/// Category summary for table display
#[derive(Tabled)]
struct CategoryDisplay {
    #[tabled(rename = "SLUG")]
    slug: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PRODUCTS")]
    products: String,
}

impl From<&CategorySummary> for CategoryDisplay {
    fn from(summary: &CategorySummary) -> Self {
        Self {
            slug: summary.slug.clone(),
            name: summary.name.clone(),
            products: summary
                .product_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the categories command
pub async fn run(ctx: &CommandContext, tree: bool) -> Result<()> {
    let index = ctx.client.fetch_category_summaries().await?;

    if tree {
        for category in &index.categories {
            print_tree(category, 0);
        }
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&index.categories)?);
        }
        OutputFormat::Table => {
            let rows: Vec<CategoryDisplay> = flatten(&index.categories)
                .iter()
                .map(|c| CategoryDisplay::from(*c))
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Pretty => {
            if index.categories.is_empty() {
                println!("No categories found.");
                return Ok(());
            }
            for category in &index.categories {
                print_tree(category, 0);
            }
            if let Some(total) = index.total_products {
                println!("\n{} products total", total.to_string().bold());
            }
        }
    }

    Ok(())
}

/// Depth-first flatten of the category tree for tabular output
fn flatten(categories: &[CategorySummary]) -> Vec<&CategorySummary> {
    let mut out = Vec::new();
    for category in categories {
        out.push(category);
        out.extend(flatten(&category.subcategories));
    }
    out
}

fn print_tree(category: &CategorySummary, depth: usize) {
    let indent = "  ".repeat(depth);
    let count = category
        .product_count
        .map(|n| format!(" ({n})"))
        .unwrap_or_default();
    println!(
        "{}{} {}{}",
        indent,
        category.name.bold(),
        category.slug.dimmed(),
        count.dimmed()
    );

    for child in &category.subcategories {
        print_tree(child, depth + 1);
    }
}
