//! Product command implementation

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::ProductDetail;
use crate::error::{Error, Result};
use crate::output::formatters::{format_availability, format_price, format_rating};
use crate::output::json;
use crate::viewmodel::ProductDetailViewModel;

/// Run the product command
pub async fn run(ctx: &CommandContext, id: &str) -> Result<()> {
    let mut vm = ProductDetailViewModel::new(ctx.client.clone());
    vm.load_product_detail(id).await;

    if let Some(message) = vm.error_message() {
        return Err(Error::Other(message.to_string()));
    }
    let Some(detail) = vm.detail() else {
        return Err(Error::Other(format!("No detail data for product {id}")));
    };

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(detail)?);
        }
        _ => print_detail(detail),
    }

    Ok(())
}

fn print_detail(detail: &ProductDetail) {
    match detail.brand {
        Some(ref brand) => println!("{} {}", brand.bold(), detail.name.bold()),
        None => println!("{}", detail.name.bold()),
    }
    println!("{}", detail.id.dimmed());
    println!();

    println!("Price:        {}", format_price(detail.price.as_ref()));
    println!("Rating:       {}", format_rating(detail.rating.as_ref()));
    println!(
        "Availability: {}",
        format_availability(detail.availability.as_ref())
    );

    if let Some(ref description) = detail.description {
        println!("\n{description}");
    }

    if !detail.features.is_empty() {
        println!("\n{}", "Features".bold());
        for feature in &detail.features {
            println!("  • {feature}");
        }
    }

    let specs = detail.specifications_list();
    if !specs.is_empty() {
        println!("\n{}", "Specifications".bold());
        let width = specs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in specs {
            println!("  {key:width$}  {value}");
        }
    }

    if !detail.media.images.is_empty() {
        println!("\n{}", "Images".bold());
        for image in &detail.media.images {
            println!("  {}", image.dimmed());
        }
    }
}
