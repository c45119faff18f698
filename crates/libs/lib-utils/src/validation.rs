//! # Validation Utilities
//!
//! Field-level checks shared by the listing and profile forms.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check: one `@`, a dot in the domain).
pub fn validate_email(email: &str) -> Result<(), String> {
    match email.trim().split_once('@') {
        Some((user, domain))
            if !user.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("Invalid email format".to_string()),
    }
}

/// Validate a contact number: digits with optional `+`, spaces and dashes,
/// between 7 and 15 digits.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let trimmed = phone.trim();
    let allowed = trimmed
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || c == ' ' || c == '-' || (c == '+' && i == 0));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();

    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err("Invalid contact number".to_string())
    }
}

/// Parse a user-entered price. Accepts an optional currency symbol and
/// thousands separators; rejects negatives, NaN and infinities.
pub fn parse_price(input: &str) -> Result<f64, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err("Price cannot be empty".to_string());
    }

    match cleaned.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        Ok(_) => Err("Price must be a positive number".to_string()),
        Err(_) => Err("Price must be a number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Lamp", "Title").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Title"),
            Err("Title cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("asha@example.com").is_ok());
        assert!(validate_email("a.b@shop.co.in").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("asha").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("asha@example").is_err());
        assert!(validate_email("asha@@example.com").is_err());
        assert!(validate_email("asha@example.").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+91 98765-43210").is_ok());
        assert!(validate_phone("0221234567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98765abc43").is_err());
        assert!(validate_phone("98+7654321").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("450"), Ok(450.0));
        assert_eq!(parse_price(" ₹1,499.50 "), Ok(1499.5));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert!(parse_price("").is_err());
        assert!(parse_price("cheap").is_err());
        assert!(parse_price("-3").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }
}
