//! Browse command implementation

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::Product;
use crate::error::{Error, Result};
use crate::output::formatters::{format_availability, format_price, format_rating};
use crate::output::{json, table};
use crate::viewmodel::CatalogViewModel;

/// Product for table display
#[derive(Tabled)]
struct ProductDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "BRAND")]
    brand: String,
    #[tabled(rename = "SUBCATEGORY")]
    subcategory: String,
    #[tabled(rename = "PRICE")]
    price: String,
}

impl From<&Product> for ProductDisplay {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            brand: product.brand.clone().unwrap_or_else(|| "-".to_string()),
            subcategory: product
                .subcategory
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            price: format_price(product.price.as_ref()),
        }
    }
}

/// Run the browse command
pub async fn run(
    ctx: &CommandContext,
    slug: &str,
    subcategory: Option<&str>,
    filter: Option<&str>,
    fresh: bool,
) -> Result<()> {
    let mut vm = CatalogViewModel::new(ctx.client.clone());

    if fresh {
        vm.refresh_products(slug).await;
    } else {
        vm.load_products(slug).await;
    }

    if let Some(message) = vm.error_message.take() {
        return Err(Error::Other(message));
    }

    if let Some(tag) = subcategory {
        vm.select_subcategory(tag);
    }
    if let Some(text) = filter {
        vm.filter_text = text.to_string();
    }

    let products = vm.filtered_products();

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&products)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ProductDisplay> =
                products.iter().map(|p| ProductDisplay::from(*p)).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Pretty => {
            if products.is_empty() {
                println!("No products match.");
                return Ok(());
            }

            let tags = vm.subcategories();
            if !tags.is_empty() {
                println!("Subcategories: {}\n", tags.join(", ").dimmed());
            }

            for product in &products {
                print_product(product);
            }
            println!("\n{} products shown", products.len().to_string().bold());
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    println!("{}  {}", product.id.dimmed(), product.title.bold());

    let mut line = vec![format_price(product.price.as_ref())];
    if let Some(ref rating) = product.rating {
        line.push(format_rating(Some(rating)));
    }
    line.push(format_availability(product.availability.as_ref()).to_string());
    println!("  {}", line.join("  ·  "));

    if let Some(ref badges) = product.badges
        && !badges.is_empty()
    {
        println!("  {}", badges.join(", ").yellow());
    }
}
