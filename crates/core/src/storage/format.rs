//! JSON layout of an inventory file.
//!
//! ```text
//! [
//!   {
//!     "code": "P001", "name": "...", "price": 45.99, "stock": 10,
//!     "supplier": { "code": "PR01", "name": "TechZone", "contact": "..." }
//!   },
//!   ...
//! ]
//! ```
//!
//! Numbers are always written natively. On read, `price` and `stock` may also
//! be JSON strings holding the number, which older files contain for
//! products entered by hand. Those older files also use Spanish keys
//! (`codigo`, `nombre`, `precio`, `proveedor`, `contacto`); they are accepted
//! as aliases and rewritten with the English keys on the next save.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::product::Product;

/// Encode products as a pretty-printed JSON array.
pub fn write_products(products: &[Product]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(products)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize products: {e}")))
}

/// Decode a JSON array of product records.
pub fn read_products(data: &str) -> Result<Vec<Product>, CoreError> {
    serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Invalid inventory JSON: {e}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StockRepr {
    Number(u32),
    Text(String),
}

pub(crate) fn price_from_number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(n) => n,
        PriceRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("price is not a number: '{s}'")))?,
    };
    if !price.is_finite() || price < 0.0 {
        return Err(de::Error::custom(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

pub(crate) fn stock_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StockRepr::deserialize(deserializer)? {
        StockRepr::Number(n) => Ok(n),
        StockRepr::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| de::Error::custom(format!("stock is not a whole number: '{s}'"))),
    }
}
