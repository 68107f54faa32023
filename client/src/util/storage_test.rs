use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("token"), None);
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    store.set("token", "def");
    assert_eq!(store.get("token").as_deref(), Some("def"));
    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[test]
fn json_helpers_round_trip_through_store() {
    let store = MemoryStore::default();
    save_json(&store, "numbers", &vec![1, 2, 3]);
    assert_eq!(store.get("numbers").as_deref(), Some("[1,2,3]"));
    let loaded: Option<Vec<i32>> = load_json(&store, "numbers");
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_treats_garbage_as_absent() {
    let store = MemoryStore::default();
    store.set("user", "{not json");
    let loaded: Option<Vec<i32>> = load_json(&store, "user");
    assert_eq!(loaded, None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_natively() {
    BrowserStore.set("token", "abc");
    assert_eq!(BrowserStore.get("token"), None);
}
