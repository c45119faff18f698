//! # Shared Utility Functions
//!
//! Display helpers shared by every screen that renders a product card.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, truncate_text};
//!
//! assert_eq!(format_price(1499.0), "₹1,499");
//! assert_eq!(truncate_text("Vintage brass table lamp", 10), "Vintage...");
//! ```

/// Format a price in rupees with thousands separators.
///
/// Whole amounts drop the decimals; fractional amounts keep two places.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0.0), "₹0");
/// assert_eq!(format_price(1234567.0), "₹12,34,567");
/// assert_eq!(format_price(99.5), "₹99.50");
/// ```
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_indian(whole);
    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{}₹{}", sign, grouped)
    } else {
        format!("{}₹{}.{:02}", sign, grouped, fraction)
    }
}

/// Indian digit grouping: last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Truncate text to at most `max_chars` characters, ending with `...`.
///
/// Counts characters, not bytes, so multi-byte titles never split mid-glyph.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("a longer product title", 9), "a long...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}
