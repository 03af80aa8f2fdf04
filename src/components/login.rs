// ============================================================================
// LOGIN - Única ruta alcanzable sin sesión
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_store;
use crate::models::{LoginRequest, Session};
use crate::routes::Route;
use crate::services::auth_service;

#[function_component(Login)]
pub fn login() -> Html {
    let user_id = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let session = use_session_store();
    let navigator = use_navigator();

    // Con token ya presente no hay nada que hacer aquí.
    {
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if session.is_authenticated() {
                if let Some(navigator) = &navigator {
                    navigator.replace(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let on_user_id = {
        let user_id = user_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_id.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let user_id = user_id.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session = session.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            loading.set(true);

            let credentials = LoginRequest {
                user_id: (*user_id).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let session = session.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&credentials).await {
                    Ok(response) => match response.token() {
                        Some(token) => {
                            session.set(&Session {
                                token: token.to_string(),
                                user_id: response.user_id_string(),
                                role: response.role.clone().unwrap_or_default(),
                            });
                            log::info!("✅ Login correcto, sesión guardada");
                            if let Some(navigator) = &navigator {
                                navigator.push(&Route::Dashboard);
                            }
                        }
                        None => {
                            error.set(Some("Invalid response from server.".to_string()));
                        }
                    },
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-logo">
                    <span class="logo-icon">{"🏥"}</span>
                    <h2>{"Sign In"}</h2>
                </div>

                if let Some(message) = &*error {
                    <div class="login-error">{message}</div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="User ID"
                        value={(*user_id).clone()}
                        oninput={on_user_id}
                        required=true
                    />

                    <div class="password-field">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                        <button type="button" class="toggle-password" onclick={on_toggle_password}>
                            { if *show_password { "🙈" } else { "👁" } }
                        </button>
                    </div>

                    <button type="submit" class="btn-login" disabled={*loading}>
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
