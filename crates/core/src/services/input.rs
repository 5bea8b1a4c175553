//! Coercion of user-typed text into product fields.

use crate::errors::CoreError;

/// Parse a price: a finite, non-negative decimal. Surrounding whitespace is ignored.
pub fn parse_price(text: &str) -> Result<f64, CoreError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(CoreError::invalid_input("price", trimmed)),
    }
}

/// Parse a stock count: a whole number of units.
pub fn parse_stock(text: &str) -> Result<u32, CoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| CoreError::invalid_input("stock", trimmed))
}

/// Blank input means "not supplied".
pub fn parse_optional_price(text: &str) -> Result<Option<f64>, CoreError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_price(text).map(Some)
}

pub fn parse_optional_stock(text: &str) -> Result<Option<u32>, CoreError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_stock(text).map(Some)
}

pub fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
