use serde::{Deserialize, Serialize};

/// A supplier of one or more products.
///
/// Products embed their own copy of the supplier at creation time, so a
/// `Supplier` is a plain value: changing one never reaches into products
/// that were built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier code, the identity used by the registry (e.g., "PR01")
    #[serde(alias = "codigo")]
    pub code: String,

    /// Display name (e.g., "TechZone")
    #[serde(alias = "nombre")]
    pub name: String,

    /// Free-form contact, usually an e-mail address
    #[serde(alias = "contacto")]
    pub contact: String,
}

impl Supplier {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(Supplier) code: {}, name: {}, contact: {}",
            self.code, self.name, self.contact
        )
    }
}
