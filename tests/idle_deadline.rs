//! Tests de integración de la primitiva de deadline cancelable: exactamente
//! un deadline vivo por instancia y ningún disparo tras un reset o cancel.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use hms_pwa::hooks::IdleDeadline;
use hms_pwa::models::Session;
use hms_pwa::stores::SessionStore;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn fires_exactly_once_after_the_limit() {
    let fired = Rc::new(Cell::new(0u32));
    let mut deadline = IdleDeadline::new();

    let counter = fired.clone();
    deadline.schedule(20, move || counter.set(counter.get() + 1));

    TimeoutFuture::new(80).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn reset_inside_the_window_restarts_it_in_full() {
    let fired = Rc::new(Cell::new(0u32));
    let mut deadline = IdleDeadline::new();

    let counter = fired.clone();
    deadline.schedule(60, move || counter.set(counter.get() + 1));

    // Actividad a mitad de ventana: cancel + re-arm.
    TimeoutFuture::new(30).await;
    let counter = fired.clone();
    deadline.schedule(60, move || counter.set(counter.get() + 1));

    // A 40ms del reset la ventana nueva aún no venció y la vieja ya no existe.
    TimeoutFuture::new(40).await;
    assert_eq!(fired.get(), 0);

    TimeoutFuture::new(40).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn cancel_prevents_firing() {
    let fired = Rc::new(Cell::new(0u32));
    let mut deadline = IdleDeadline::new();

    let counter = fired.clone();
    deadline.schedule(20, move || counter.set(counter.get() + 1));
    deadline.cancel();

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 0);

    // Cancelar sin deadline pendiente es un no-op.
    deadline.cancel();
}

#[wasm_bindgen_test]
async fn rescheduling_never_leaves_two_live_deadlines() {
    let first = Rc::new(Cell::new(0u32));
    let second = Rc::new(Cell::new(0u32));
    let mut deadline = IdleDeadline::new();

    let counter = first.clone();
    deadline.schedule(20, move || counter.set(counter.get() + 1));
    let counter = second.clone();
    deadline.schedule(20, move || counter.set(counter.get() + 1));

    TimeoutFuture::new(80).await;
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[wasm_bindgen_test]
async fn drop_cancels_the_pending_deadline() {
    let fired = Rc::new(Cell::new(0u32));
    {
        let mut deadline = IdleDeadline::new();
        let counter = fired.clone();
        deadline.schedule(20, move || counter.set(counter.get() + 1));
    }

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 0);
}

/// Expiración de inactividad de punta a punta (ventana comprimida): el
/// vencimiento limpia el store una sola vez y registra una única navegación.
#[wasm_bindgen_test]
async fn expiry_clears_session_and_navigates_once() {
    let store = SessionStore::new();
    store.clear();
    store.set(&Session {
        token: "bearer-abc123".to_string(),
        user_id: "U042".to_string(),
        role: "Admin".to_string(),
    });

    let navigations = Rc::new(Cell::new(0u32));
    let mut deadline = IdleDeadline::new();

    let on_expire_store = store.clone();
    let on_expire_navigations = navigations.clone();
    deadline.schedule(20, move || {
        on_expire_store.clear();
        on_expire_navigations.set(on_expire_navigations.get() + 1);
    });

    TimeoutFuture::new(80).await;
    assert!(store.get().is_none());
    assert_eq!(navigations.get(), 1);

    // Sin más deadlines pendientes no hay segundo disparo.
    TimeoutFuture::new(40).await;
    assert_eq!(navigations.get(), 1);
}
