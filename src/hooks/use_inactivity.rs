// ============================================================================
// INACTIVITY MONITOR - Logout forzado tras un periodo sin actividad
// ============================================================================
// Cada señal de actividad reinicia la ventana completa (cancel + re-arm,
// sin debounce). El cleanup del efecto suelta el deadline y todos los
// listeners en cualquier salida del componente.
// ============================================================================

use gloo_events::EventListener;
use yew::prelude::*;

use crate::hooks::idle_deadline::IdleDeadline;
use crate::utils::constants::ACTIVITY_EVENTS;

/// Monta el monitor de inactividad en el componente que renderiza el Header.
/// `on_expire` corre una sola vez si la ventana vence sin reset: el llamador
/// limpia la sesión, publica el aviso y navega a login.
#[hook]
pub fn use_inactivity_logout(limit_ms: u32, on_expire: Callback<()>) {
    let deadline = use_mut_ref(IdleDeadline::new);

    use_effect_with(limit_ms, move |&limit| {
        let arm = {
            let deadline = deadline.clone();
            let on_expire = on_expire.clone();
            move || {
                let on_expire = on_expire.clone();
                deadline.borrow_mut().schedule(limit, move || {
                    log::warn!("⏰ Ventana de inactividad vencida ({} ms)", limit);
                    on_expire.emit(());
                });
            }
        };

        arm();

        let mut listeners = Vec::new();
        if let Some(window) = web_sys::window() {
            for event_name in ACTIVITY_EVENTS {
                let arm = arm.clone();
                listeners.push(EventListener::new(&window, event_name, move |_event| {
                    arm();
                }));
            }
        }

        move || {
            // Drop de los listeners los desuscribe; el deadline se cancela
            // en el mismo teardown síncrono.
            drop(listeners);
            deadline.borrow_mut().cancel();
        }
    });
}
