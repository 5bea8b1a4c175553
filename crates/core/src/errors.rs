use thiserror::Error;

/// Unified error type for the entire inventory-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to load inventory data: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Product already exists: {0}")]
    DuplicateProduct(String),

    #[error("Unknown supplier code: {0}")]
    UnknownSupplier(String),

    #[error("No products for supplier: {0}")]
    NoProductsForSupplier(String),

    // ── Input ───────────────────────────────────────────────────────
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: String, value: String },

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    pub(crate) fn invalid_input(field: &str, value: &str) -> Self {
        CoreError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
