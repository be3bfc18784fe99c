//! Reusable formatting utilities for CLI output
//!
//! Common display helpers for prices, ratings, and stock status used
//! across multiple commands.

use crate::client::models::{Availability, Price, Rating};

/// Format a price for display, with the savings percentage when the
/// product is discounted.
///
/// # Example output
/// - `$99.99`
/// - `$99.99 (was $149.99, save 33%)`
pub fn format_price(price: Option<&Price>) -> String {
    let Some(price) = price else {
        return "N/A".to_string();
    };

    match (price.original, price.savings_percentage()) {
        (Some(original), Some(savings)) => format!(
            "${:.2} (was ${:.2}, save {}%)",
            price.current, original, savings
        ),
        _ => format!("${:.2}", price.current),
    }
}

/// Format a star rating with its review count.
///
/// # Example output
/// `4.6/5 (123 reviews)`
pub fn format_rating(rating: Option<&Rating>) -> String {
    match rating {
        Some(rating) => format!("{:.1}/5 ({} reviews)", rating.average, rating.count),
        None => "N/A".to_string(),
    }
}

/// Format stock availability. Absent availability data reads as unknown,
/// not out of stock.
pub fn format_availability(availability: Option<&Availability>) -> &'static str {
    match availability {
        Some(a) if a.in_stock => "In stock",
        Some(_) => "Out of stock",
        None => "Unknown",
    }
}

/// Truncate text to `max` characters for table cells, appending an
/// ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
