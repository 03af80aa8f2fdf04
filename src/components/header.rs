// ============================================================================
// HEADER - Búsqueda por NRIC, hamburguesa y logout
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_store;
use crate::models::StatusMessage;
use crate::routes::{RegisterPrefill, Route};
use crate::services::patient_service;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_menu_click: Callback<MouseEvent>,
    /// Canal de status override hacia el Layout: Some sustituye el
    /// contenido ruteado por el panel de mensaje, None lo restaura.
    pub set_status: Callback<Option<StatusMessage>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nric = use_state(String::new);
    let session = use_session_store();
    let navigator = use_navigator();

    let on_nric_input = {
        let nric = nric.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nric.set(input.value());
        })
    };

    let on_check = {
        let nric = nric.clone();
        let set_status = props.set_status.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let value = nric.trim().to_string();
            if value.is_empty() {
                set_status.emit(Some(StatusMessage::red(
                    "Please enter a valid NRIC/Passport number.",
                )));
                return;
            }

            let set_status = set_status.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::check_nric(&value).await {
                    Ok(result) if result.exists => {
                        set_status.emit(Some(StatusMessage::green("Patient exists.")));
                    }
                    Ok(_) => {
                        // No existe: el registro recibe el NRIC tecleado como
                        // estado de ruta y enfoca el nombre completo.
                        if let Some(navigator) = &navigator {
                            navigator.push_with_state(
                                &Route::PatientRegister,
                                RegisterPrefill::new(value),
                            );
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error comprobando NRIC: {}", e);
                        set_status.emit(Some(StatusMessage::red(
                            "Error checking NRIC/Passport number.",
                        )));
                    }
                }
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("👋 Logout manual, limpiando sesión");
            session.clear();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let user_label = session
        .get()
        .map(|s| s.user_id)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "user".to_string());

    html! {
        <header class="app-header">
            <button class="hamburger" onclick={props.on_menu_click.clone()}>
                {"☰"}
            </button>

            <div class="header-search">
                <input
                    type="text"
                    placeholder="Enter NRIC / Passport Number"
                    value={(*nric).clone()}
                    oninput={on_nric_input}
                />
                <button class="btn-check" onclick={on_check}>{"Check"}</button>
            </div>

            <div class="header-right">
                <button class="btn-logout" title="Sign out" onclick={on_logout}>
                    {"Logout"}
                </button>
                <span class="header-user">{user_label}</span>
            </div>
        </header>
    }
}
