use serde::{Deserialize, Serialize};

use super::supplier::Supplier;
use crate::storage::format;

/// A single product line in the inventory.
///
/// **Important**: `supplier` is a snapshot taken when the product is built,
/// not a reference to a shared supplier record. Serializing a product always
/// writes the full supplier alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product code, unique within an inventory (e.g., "P001")
    #[serde(alias = "codigo")]
    pub code: String,

    #[serde(alias = "nombre")]
    pub name: String,

    /// Unit price in euros, never negative
    #[serde(alias = "precio", deserialize_with = "format::price_from_number_or_text")]
    pub price: f64,

    /// Units in stock
    #[serde(deserialize_with = "format::stock_from_number_or_text")]
    pub stock: u32,

    #[serde(alias = "proveedor")]
    pub supplier: Supplier,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        stock: u32,
        supplier: &Supplier,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            stock,
            supplier: supplier.clone(),
        }
    }

    /// Stock value of this line (`price * stock`).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }

    /// Apply the supplied fields of an update; absent fields are left as they are.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {:.2} € ({} uds.) | {}",
            self.code, self.name, self.price, self.stock, self.supplier
        )
    }
}

/// Partial update of a product. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}
