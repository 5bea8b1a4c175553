use tracing::debug;

use crate::errors::CoreError;
use crate::models::product::{Product, ProductUpdate};

/// Product list operations: add, lookup, update, removal and totals.
///
/// Pure business logic over a `Vec<Product>` — no I/O. Easy to test.
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    /// Append a product. Rejects empty codes/names and codes already present.
    pub fn add_product(
        &self,
        products: &mut Vec<Product>,
        product: Product,
    ) -> Result<(), CoreError> {
        self.validate_product(&product)?;
        if products.iter().any(|p| p.code == product.code) {
            return Err(CoreError::DuplicateProduct(product.code));
        }
        debug!(code = %product.code, "adding product");
        products.push(product);
        Ok(())
    }

    /// First product with `code`, scanning the whole list.
    pub fn find<'a>(&self, products: &'a [Product], code: &str) -> Option<&'a Product> {
        products.iter().find(|p| p.code == code)
    }

    /// Overwrite the supplied fields of the first product with `code`.
    pub fn update<'a>(
        &self,
        products: &'a mut [Product],
        code: &str,
        update: ProductUpdate,
    ) -> Result<&'a Product, CoreError> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(CoreError::ValidationError("Product name must not be empty".into()));
            }
        }
        if let Some(price) = update.price {
            Self::validate_price(price)?;
        }

        let product = products
            .iter_mut()
            .find(|p| p.code == code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;
        debug!(code, ?update, "updating product");
        product.apply(update);
        Ok(product)
    }

    /// Remove every product with `code`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove(&self, products: &mut Vec<Product>, code: &str) -> usize {
        let before = products.len();
        products.retain(|p| p.code != code);
        let removed = before - products.len();
        debug!(code, removed, "removed products");
        removed
    }

    /// Sum of `price * stock` over all products.
    pub fn total_value(&self, products: &[Product]) -> f64 {
        products.iter().map(Product::value).sum()
    }

    /// Products whose embedded supplier name equals `supplier_name`.
    pub fn by_supplier<'a>(
        &self,
        products: &'a [Product],
        supplier_name: &str,
    ) -> Result<Vec<&'a Product>, CoreError> {
        let matches: Vec<&Product> = products
            .iter()
            .filter(|p| p.supplier.name == supplier_name)
            .collect();
        if matches.is_empty() {
            return Err(CoreError::NoProductsForSupplier(supplier_name.to_string()));
        }
        Ok(matches)
    }

    /// Presence checks plus price sanity.
    fn validate_product(&self, product: &Product) -> Result<(), CoreError> {
        if product.code.trim().is_empty() {
            return Err(CoreError::ValidationError("Product code must not be empty".into()));
        }
        if product.name.trim().is_empty() {
            return Err(CoreError::ValidationError("Product name must not be empty".into()));
        }
        Self::validate_price(product.price)
    }

    fn validate_price(price: f64) -> Result<(), CoreError> {
        if !price.is_finite() || price < 0.0 {
            return Err(CoreError::invalid_input("price", &price.to_string()));
        }
        Ok(())
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
