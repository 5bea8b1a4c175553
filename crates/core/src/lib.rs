pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use models::{
    product::{Product, ProductUpdate},
    registry::SupplierRegistry,
    sample,
    supplier::Supplier,
};
use services::inventory_service::InventoryService;
use storage::manager::StorageManager;
use tracing::warn;

use errors::CoreError;

/// Result of a successful [`Inventory::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; holds the number of products loaded.
    Loaded(usize),
    /// The file does not exist; the inventory is now empty.
    Missing,
}

/// Main entry point for the inventory core library.
/// Holds the product list bound to a backing file, plus the supplier registry
/// used to resolve supplier codes for new products.
#[must_use]
pub struct Inventory {
    file_name: PathBuf,
    products: Vec<Product>,
    suppliers: SupplierRegistry,
    inventory_service: InventoryService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("file_name", &self.file_name)
            .field("products", &self.products.len())
            .field("suppliers", &self.suppliers.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Inventory {
    /// Create an empty inventory bound to `file_name`, with the sample
    /// suppliers registered.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self::with_suppliers(file_name, sample::supplier_registry())
    }

    /// Create an empty inventory bound to `file_name` with a custom supplier registry.
    pub fn with_suppliers(file_name: impl Into<PathBuf>, suppliers: SupplierRegistry) -> Self {
        Self {
            file_name: file_name.into(),
            products: Vec::new(),
            suppliers,
            inventory_service: InventoryService::new(),
            dirty: false,
        }
    }

    /// The file this inventory was created for.
    #[must_use]
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Replace the product list with the contents of `path`.
    ///
    /// A missing file empties the inventory and is not an error. If the file
    /// exists but cannot be read or parsed, the error is returned and the
    /// current products are kept as they are.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, CoreError> {
        let path = path.as_ref();
        let loaded = match StorageManager::load_from_file(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "inventory load failed, keeping current products"
                );
                return Err(e);
            }
        };

        let outcome = match loaded {
            Some(products) => {
                Self::warn_duplicates(&products);
                self.suppliers.absorb(&products);
                let count = products.len();
                self.products = products;
                LoadOutcome::Loaded(count)
            }
            None => {
                self.products.clear();
                LoadOutcome::Missing
            }
        };
        self.dirty = false;
        Ok(outcome)
    }

    /// Load from the file this inventory was created for.
    pub fn load_default(&mut self) -> Result<LoadOutcome, CoreError> {
        let path = self.file_name.clone();
        self.load(path)
    }

    /// Write every product to `path`, replacing its contents.
    /// Clears the unsaved-changes flag on success.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.products, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Save to the file this inventory was created for.
    pub fn save_default(&mut self) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.products, &self.file_name)?;
        self.dirty = false;
        Ok(())
    }

    // ── Product Management ──────────────────────────────────────────

    /// Append a product. Fails if its code is already in the inventory.
    pub fn add_product(&mut self, product: Product) -> Result<(), CoreError> {
        self.inventory_service.add_product(&mut self.products, product)?;
        self.dirty = true;
        Ok(())
    }

    /// Build a product for a registered supplier code and append it.
    pub fn add_new_product(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        stock: u32,
        supplier_code: &str,
    ) -> Result<&Product, CoreError> {
        let supplier = self
            .suppliers
            .get(supplier_code)
            .ok_or_else(|| CoreError::UnknownSupplier(supplier_code.to_string()))?;
        let product = Product::new(code, name, price, stock, supplier);
        let code = product.code.clone();
        self.add_product(product)?;
        self.products
            .last()
            .ok_or(CoreError::ProductNotFound(code))
    }

    /// Look up a product by code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Product> {
        self.inventory_service.find(&self.products, code)
    }

    /// Overwrite the supplied fields of the product with `code`.
    pub fn update(&mut self, code: &str, update: ProductUpdate) -> Result<&Product, CoreError> {
        let product = self
            .inventory_service
            .update(&mut self.products, code, update)?;
        self.dirty = true;
        Ok(product)
    }

    /// Remove every product with `code`. Returns the number removed.
    pub fn remove(&mut self, code: &str) -> usize {
        let removed = self.inventory_service.remove(&mut self.products, code);
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Display line for every product, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.products.iter().map(ToString::to_string).collect()
    }

    /// Total stock value: sum of `price * stock`.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.inventory_service.total_value(&self.products)
    }

    /// Products supplied by `supplier_name` (exact match on the embedded supplier name).
    pub fn list_by_supplier(&self, supplier_name: &str) -> Result<Vec<&Product>, CoreError> {
        self.inventory_service.by_supplier(&self.products, supplier_name)
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // ── Suppliers ───────────────────────────────────────────────────

    #[must_use]
    pub fn suppliers(&self) -> &SupplierRegistry {
        &self.suppliers
    }

    /// Add or replace a supplier in the registry. Existing products keep
    /// their own snapshot.
    pub fn register_supplier(&mut self, supplier: Supplier) -> Option<Supplier> {
        self.suppliers.register(supplier)
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the inventory has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn warn_duplicates(products: &[Product]) {
        let mut seen = HashSet::new();
        for product in products {
            if !seen.insert(product.code.as_str()) {
                warn!(code = %product.code, "duplicate product code in inventory file");
            }
        }
    }
}
