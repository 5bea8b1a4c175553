// ═══════════════════════════════════════════════════════════════════
// Storage Tests — JSON format, StorageManager
// ═══════════════════════════════════════════════════════════════════

use inventory_core::errors::CoreError;
use inventory_core::models::product::Product;
use inventory_core::models::sample;
use inventory_core::storage::format;
use inventory_core::storage::manager::StorageManager;

// ═══════════════════════════════════════════════════════════════════
// JSON format
// ═══════════════════════════════════════════════════════════════════

mod json_format {
    use super::*;

    #[test]
    fn writes_array_of_records() {
        let json = format::write_products(&sample::products()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 5);
        assert_eq!(array[0]["code"], "P001");
        assert_eq!(array[0]["supplier"]["name"], "TechZone");
        assert_eq!(array[2]["price"], 139.0);
        assert_eq!(array[2]["stock"], 8);
    }

    #[test]
    fn empty_list_is_empty_array() {
        let json = format::write_products(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
        assert!(format::read_products(&json).unwrap().is_empty());
    }

    #[test]
    fn reads_what_it_writes() {
        let products = sample::products();
        let json = format::write_products(&products).unwrap();
        assert_eq!(format::read_products(&json).unwrap(), products);
    }

    #[test]
    fn reads_compact_file_with_text_numbers() {
        let json = r#"[{"code": "P006", "name": "Webcam HD", "price": "24.90", "stock": "7",
            "supplier": {"code": "PR02", "name": "VisualTech",
                "contact": "contacto@visualtech.es"}}]"#;
        let products = format::read_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, 24.9);
        assert_eq!(products[0].stock, 7);
        assert_eq!(products[0].supplier, sample::visual_tech());
    }

    #[test]
    fn reads_spanish_keys() {
        let json = r#"[
            {"codigo": "P001", "nombre": "Teclado mecánico RGB", "precio": 45.99, "stock": 10,
             "proveedor": {"codigo": "PR01", "nombre": "TechZone",
                "contacto": "ventas@techzone.com"}},
            {"codigo": "P006", "nombre": "Webcam HD", "precio": "24.90", "stock": "7",
             "proveedor": {"codigo": "PR02", "nombre": "VisualTech",
                "contacto": "contacto@visualtech.es"}}
        ]"#;
        let products = format::read_products(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], sample::products()[0]);
        assert_eq!(products[1].code, "P006");
        assert_eq!(products[1].name, "Webcam HD");
        assert_eq!(products[1].price, 24.9);
        assert_eq!(products[1].stock, 7);
        assert_eq!(products[1].supplier, sample::visual_tech());
    }

    #[test]
    fn spanish_keys_are_rewritten_in_english() {
        let json = r#"[{"codigo": "P002", "nombre": "Ratón inalámbrico", "precio": 19.5,
            "stock": 25, "proveedor": {"codigo": "PR01", "nombre": "TechZone",
                "contacto": "ventas@techzone.com"}}]"#;
        let products = format::read_products(json).unwrap();
        let rewritten = format::write_products(&products).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(value[0]["code"], "P002");
        assert_eq!(value[0]["supplier"]["contact"], "ventas@techzone.com");
        assert!(!rewritten.contains("codigo"));
        assert!(!rewritten.contains("proveedor"));
        assert_eq!(format::read_products(&rewritten).unwrap(), products);
    }

    #[test]
    fn invalid_json_is_deserialization_error() {
        let err = format::read_products("{ this is not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let err = format::read_products(r#"{"code": "P001"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"[{"code": "P001", "name": "x", "price": 1.0,
            "supplier": {"code": "PR01", "name": "TechZone", "contact": "c"}}]"#;
        assert!(format::read_products(json).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager — bytes
// ═══════════════════════════════════════════════════════════════════

mod bytes {
    use super::*;

    #[test]
    fn round_trip() {
        let products = sample::products();
        let bytes = StorageManager::save_to_bytes(&products).unwrap();
        let loaded = StorageManager::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn prices_keep_every_digit() {
        let supplier = sample::data_plus();
        let prices = [
            0.1 + 0.2,
            1.0 / 3.0,
            2.0_f64.sqrt() * 100.0,
            std::f64::consts::PI * 1e6,
            123_456.789_012_345_6,
            9_007_199_254_740_992.0,
            5e-324,
            f64::MAX,
        ];
        let mut products: Vec<Product> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                Product::new(format!("F{i:03}"), "Precio largo", price, 1, &supplier)
            })
            .collect();
        // Pseudo-random values spread over many magnitudes.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for i in 0..200 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let price = (seed >> 11) as f64 / (1u64 << 53) as f64 * 10f64.powi(i % 12);
            products.push(Product::new(format!("R{i:03}"), "Aleatorio", price, 1, &supplier));
        }

        let bytes = StorageManager::save_to_bytes(&products).unwrap();
        let loaded = StorageManager::load_from_bytes(&bytes).unwrap();

        assert_eq!(loaded.len(), products.len());
        for (before, after) in products.iter().zip(&loaded) {
            assert_eq!(
                before.price.to_bits(),
                after.price.to_bits(),
                "price of {} changed: {} -> {}",
                before.code,
                before.price,
                after.price
            );
        }
    }

    #[test]
    fn non_utf8_rejected() {
        let err = StorageManager::load_from_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager — File I/O
// ═══════════════════════════════════════════════════════════════════

mod file_io {
    use super::*;

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.json");

        let products = sample::products();
        StorageManager::save_to_file(&products, &path).unwrap();
        let loaded = StorageManager::load_from_file(&path).unwrap();

        assert_eq!(loaded, Some(products));
    }

    #[test]
    fn load_nonexistent_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert_eq!(StorageManager::load_from_file(&path).unwrap(), None);
    }

    #[test]
    fn load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"code\": ").unwrap();

        let err = StorageManager::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StorageManager::load_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("inventario.json");
        let err = StorageManager::save_to_file(&sample::products(), &path).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn overwrite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overwrite.json");

        StorageManager::save_to_file(&sample::products(), &path).unwrap();

        let single = vec![Product::new("P100", "Hub USB-C", 25.0, 4, &sample::data_plus())];
        StorageManager::save_to_file(&single, &path).unwrap();

        let loaded = StorageManager::load_from_file(&path).unwrap().unwrap();
        assert_eq!(loaded, single);
    }

    #[test]
    fn backup_copies_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.json");
        std::fs::write(&path, "[{\"code\": ").unwrap();
        assert!(StorageManager::load_from_file(&path).is_err());

        let backup = StorageManager::backup_file(&path).unwrap();
        assert_eq!(backup, dir.path().join("inventario.json.bak"));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "[{\"code\": ");

        StorageManager::save_to_file(&sample::products(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "[{\"code\": ");
    }

    #[test]
    fn backup_replaces_previous_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.json");
        std::fs::write(StorageManager::backup_path(&path), "old").unwrap();
        std::fs::write(&path, "new").unwrap();

        let backup = StorageManager::backup_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "new");
    }

    #[test]
    fn backup_of_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StorageManager::backup_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn file_contains_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.json");
        StorageManager::save_to_file(&sample::products(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"Teclado mecánico RGB\""));
    }
}
