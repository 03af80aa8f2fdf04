use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::idle_deadline::IdleDeadline;

/// Loader breve por navegación: se enciende en cada cambio de ruta y se
/// apaga tras el delay configurado. Si el usuario navega otra vez antes,
/// el timer anterior se cancela y la ventana arranca de cero.
#[hook]
pub fn use_page_loader() -> bool {
    let loading = use_state(|| false);
    let deadline = use_mut_ref(IdleDeadline::new);

    let path = use_location().map(|location| location.path().to_string());

    {
        let loading = loading.clone();
        use_effect_with(path, move |_| {
            loading.set(true);
            let done = loading.clone();
            deadline
                .borrow_mut()
                .schedule(CONFIG.ui_config.page_loader_delay_ms, move || {
                    done.set(false);
                });

            move || deadline.borrow_mut().cancel()
        });
    }

    *loading
}
