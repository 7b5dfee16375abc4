use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.load("portfolio-theme"), None);
}

#[test]
fn memory_store_round_trips_latest_value() {
    let store = MemoryStore::new();
    store.save("portfolio-theme", "light");
    store.save("portfolio-theme", "neon");
    assert_eq!(store.load("portfolio-theme").as_deref(), Some("neon"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::with("a", "1");
    assert_eq!(store.load("b"), None);
    assert_eq!(store.load("a").as_deref(), Some("1"));
}

#[test]
fn borrowed_store_writes_through() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.save("k", "v");
    assert_eq!(store.load("k").as_deref(), Some("v"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    LocalStorage.save("portfolio-theme", "light");
    assert_eq!(LocalStorage.load("portfolio-theme"), None);
}
