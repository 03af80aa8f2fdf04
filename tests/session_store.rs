//! Tests de integración del store de sesión sobre localStorage real.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use hms_pwa::models::Session;
use hms_pwa::stores::SessionStore;
use hms_pwa::utils::constants::{TOKEN_KEY, USER_KEY};
use hms_pwa::utils::storage;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_session() -> Session {
    Session {
        token: "bearer-abc123".to_string(),
        user_id: "U042".to_string(),
        role: "Admin".to_string(),
    }
}

#[wasm_bindgen_test]
fn set_then_get_round_trips() {
    let store = SessionStore::new();
    store.clear();

    store.set(&sample_session());
    let session = store.get().expect("session should be present");
    assert_eq!(session.token, "bearer-abc123");
    assert_eq!(session.user_id, "U042");
    assert_eq!(session.role, "Admin");

    store.clear();
}

#[wasm_bindgen_test]
fn set_overwrites_unconditionally() {
    let store = SessionStore::new();
    store.clear();

    store.set(&sample_session());
    store.set(&Session {
        token: "other-token".to_string(),
        user_id: "U001".to_string(),
        role: "Doctor".to_string(),
    });

    let session = store.get().expect("session should be present");
    assert_eq!(session.token, "other-token");
    assert_eq!(session.role, "Doctor");

    store.clear();
}

#[wasm_bindgen_test]
fn clear_removes_both_keys_and_is_idempotent() {
    let store = SessionStore::new();
    store.set(&sample_session());

    store.clear();
    assert_eq!(storage::load_string(TOKEN_KEY), None);
    assert!(storage::load_string(USER_KEY).is_none());
    assert!(store.get().is_none());

    // Limpiar un store ya vacío no es un error y deja el mismo estado.
    store.clear();
    assert!(store.get().is_none());
}

#[wasm_bindgen_test]
fn empty_token_reads_as_absent() {
    let store = SessionStore::new();
    store.clear();

    storage::save_string(TOKEN_KEY, "").expect("storage should be writable");
    assert!(store.get().is_none());
    assert!(!store.is_authenticated());

    store.clear();
}

#[wasm_bindgen_test]
fn unreadable_user_payload_still_yields_session() {
    let store = SessionStore::new();
    store.clear();

    // El token presente es la única señal de autorización: un payload de
    // usuario corrupto degrada a identificadores vacíos, no a logout.
    storage::save_string(TOKEN_KEY, "bearer-abc123").expect("storage should be writable");
    storage::save_string(USER_KEY, "{not json").expect("storage should be writable");

    let session = store.get().expect("token alone should authorize");
    assert_eq!(session.token, "bearer-abc123");
    assert_eq!(session.user_id, "");
    assert_eq!(session.role, "");

    store.clear();
}
