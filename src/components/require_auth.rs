// ============================================================================
// REQUIRE AUTH - Route guard del subárbol protegido
// ============================================================================
// Dos salidas y solo dos: token presente -> children; ausente -> replace a
// /login. Es un chequeo de presencia, no se valida formato ni expiración.
// La ausencia de sesión no es un error, es el estado deslogueado normal.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_store;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session_store();
    let navigator = use_navigator();

    let authorized = session.is_authenticated();

    {
        let navigator = navigator.clone();
        use_effect_with(authorized, move |&authorized| {
            if !authorized {
                if let Some(navigator) = navigator {
                    // Replace, no push: el login queda fuera del subárbol
                    // protegido, así que no hay bucle de redirección.
                    navigator.replace(&Route::Login);
                }
            }
            || ()
        });
    }

    if authorized {
        html! { <>{props.children.clone()}</> }
    } else {
        Html::default()
    }
}
