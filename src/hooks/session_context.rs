// ============================================================================
// SESSION CONTEXT - Un SessionStore inyectado a toda la app
// ============================================================================
// El store se construye una vez en el provider y llega a cada consumidor
// vía Context API de Yew, sin globals ambientales en los consumidores.
// ============================================================================

use yew::prelude::*;

use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::new());

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionStore>>
    }
}

/// Acceso al store de sesión desde cualquier componente bajo el provider.
#[hook]
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_default()
}
