//! Built-in sample catalogue: three suppliers and five products.

use super::product::Product;
use super::registry::SupplierRegistry;
use super::supplier::Supplier;

pub fn tech_zone() -> Supplier {
    Supplier::new("PR01", "TechZone", "ventas@techzone.com")
}

pub fn visual_tech() -> Supplier {
    Supplier::new("PR02", "VisualTech", "contacto@visualtech.es")
}

pub fn data_plus() -> Supplier {
    Supplier::new("PR03", "DataPlus", "info@dataplus.com")
}

pub fn suppliers() -> Vec<Supplier> {
    vec![tech_zone(), visual_tech(), data_plus()]
}

/// Registry pre-filled with the sample suppliers.
pub fn supplier_registry() -> SupplierRegistry {
    let mut registry = SupplierRegistry::new();
    for supplier in suppliers() {
        registry.register(supplier);
    }
    registry
}

pub fn products() -> Vec<Product> {
    let tech_zone = tech_zone();
    let visual_tech = visual_tech();
    let data_plus = data_plus();

    vec![
        Product::new("P001", "Teclado mecánico RGB", 45.99, 10, &tech_zone),
        Product::new("P002", "Ratón óptico inalámbrico", 19.95, 25, &tech_zone),
        Product::new("P003", "Monitor LED 24 pulgadas", 139.00, 8, &visual_tech),
        Product::new("P004", "Disco SSD 1TB NVMe", 89.90, 15, &data_plus),
        Product::new("P005", "Auriculares Bluetooth", 29.50, 30, &visual_tech),
    ]
}
