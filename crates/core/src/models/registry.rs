use std::collections::BTreeMap;

use super::product::Product;
use super::supplier::Supplier;

/// Known suppliers, keyed by supplier code.
///
/// Used to resolve a supplier code typed by the user into the full
/// supplier record that gets embedded into a new product.
/// Iteration order is by code so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SupplierRegistry {
    suppliers: BTreeMap<String, Supplier>,
}

impl SupplierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the supplier snapshots embedded in `products`.
    /// When several products carry the same supplier code, the first one wins.
    pub fn from_products(products: &[Product]) -> Self {
        let mut registry = Self::new();
        registry.absorb(products);
        registry
    }

    /// Insert or replace a supplier. Returns the previous record for that code.
    pub fn register(&mut self, supplier: Supplier) -> Option<Supplier> {
        self.suppliers.insert(supplier.code.clone(), supplier)
    }

    /// Register every supplier snapshot from `products` whose code is not known yet.
    pub fn absorb(&mut self, products: &[Product]) {
        for product in products {
            self.suppliers
                .entry(product.supplier.code.clone())
                .or_insert_with(|| product.supplier.clone());
        }
    }

    pub fn get(&self, code: &str) -> Option<&Supplier> {
        self.suppliers.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.suppliers.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}
