//! Unit tests for the asset catalog

use assetpulse::catalog::{AssetCatalog, AssetCategory};

#[test]
fn test_default_basket_composition() {
    let catalog = AssetCatalog::default_basket();
    assert_eq!(catalog.len(), 11);
    assert_eq!(catalog.in_category(AssetCategory::Commodity).count(), 3);
    assert_eq!(catalog.in_category(AssetCategory::Etf).count(), 2);
    assert_eq!(catalog.in_category(AssetCategory::EquityIndex).count(), 6);
}

#[test]
fn test_lookup_by_symbol() {
    let catalog = AssetCatalog::default_basket();
    let gold = catalog.get("GC=F").unwrap();
    assert_eq!(gold.name, "Gold");
    assert_eq!(gold.unit, "USD/oz");
    assert_eq!(gold.category, AssetCategory::Commodity);
    assert!(catalog.get("UNKNOWN").is_none());
}

#[test]
fn test_symbols_iterate_in_catalog_order() {
    let catalog = AssetCatalog::default_basket();
    let symbols: Vec<&str> = catalog.symbols().collect();
    assert_eq!(symbols.first(), Some(&"GC=F"));
    assert_eq!(symbols.last(), Some(&"^KLSE"));
}
