use std::path::PathBuf;

/// Default inventory file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventario.json";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings for the menu binary.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// File the inventory is loaded from at start and saved to on exit.
    pub inventory_file: PathBuf,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
