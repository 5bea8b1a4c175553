use std::io::ErrorKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::product::Product;

use super::format;

/// High-level storage operations: save/load products to/from JSON files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize products to JSON bytes.
    pub fn save_to_bytes(products: &[Product]) -> Result<Vec<u8>, CoreError> {
        Ok(format::write_products(products)?.into_bytes())
    }

    /// Deserialize products from JSON bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Vec<Product>, CoreError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| CoreError::Deserialization(format!("Inventory file is not UTF-8: {e}")))?;
        format::read_products(text)
    }

    /// Write products to `path`, replacing whatever was there.
    pub fn save_to_file(products: &[Product], path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let bytes = Self::save_to_bytes(products)?;
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), count = products.len(), "inventory saved");
        Ok(())
    }

    /// Read products from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist; any other I/O failure
    /// or malformed content is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Option<Vec<Product>>, CoreError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "inventory file not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let products = Self::load_from_bytes(&bytes)?;
        info!(path = %path.display(), count = products.len(), "inventory loaded");
        Ok(Some(products))
    }

    /// Copy `path` to `<path>.bak`, replacing any previous backup.
    /// Returns the backup's path.
    pub fn backup_file(path: impl AsRef<Path>) -> Result<PathBuf, CoreError> {
        let path = path.as_ref();
        let backup = Self::backup_path(path);
        std::fs::copy(path, &backup)?;
        warn!(path = %path.display(), backup = %backup.display(), "inventory file backed up");
        Ok(backup)
    }

    /// `inventario.json` -> `inventario.json.bak`
    pub fn backup_path(path: impl AsRef<Path>) -> PathBuf {
        let mut name = OsString::from(path.as_ref().as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }
}
