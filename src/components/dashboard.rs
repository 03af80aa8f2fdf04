// ============================================================================
// DASHBOARD - Pestañas por rol: flujo de pacientes y panel de doctor
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{DoctorPanel, PatientCard, PatientCountWidget, PatientList};
use crate::hooks::{use_session_store, IdleDeadline};
use crate::models::{allowed_tabs, DashboardTab, Patient};
use crate::routes::Route;
use crate::services::patient_service;

const CREATE_SHORTCUT_VISIBLE_MS: u32 = 20_000;
const NOT_FOUND_NOTICE_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub active_tab: DashboardTab,
    pub on_select_tab: Callback<DashboardTab>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session_store();
    let navigator = use_navigator();

    let nric = use_state(String::new);
    let patient = use_state(|| None::<Patient>);
    let not_found = use_state(|| false);
    let show_create = use_state(|| false);
    let create_deadline = use_mut_ref(IdleDeadline::new);
    let notice_deadline = use_mut_ref(IdleDeadline::new);

    let role = session.get().map(|s| s.role).unwrap_or_default();
    let tabs = allowed_tabs(&role);
    // Si el rol no permite la pestaña pedida, cae a la primera permitida.
    let tab = if tabs.contains(&props.active_tab) {
        props.active_tab
    } else {
        tabs[0]
    };

    let on_nric_input = {
        let nric = nric.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nric.set(input.value());
        })
    };

    let on_check = {
        let nric = nric.clone();
        let patient = patient.clone();
        let not_found = not_found.clone();
        let show_create = show_create.clone();
        let create_deadline = create_deadline.clone();
        let notice_deadline = notice_deadline.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            patient.set(None);
            not_found.set(false);

            let value = nric.trim().to_string();
            if value.is_empty() {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::NewAppointment);
                }
                return;
            }

            let patient = patient.clone();
            let not_found = not_found.clone();
            let show_create = show_create.clone();
            let create_deadline = create_deadline.clone();
            let notice_deadline = notice_deadline.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::check_nric(&value).await {
                    Ok(result) if result.exists => {
                        match patient_service::get_by_nric(&value).await {
                            Ok(found) => {
                                patient.set(Some(found));
                                show_create.set(false);
                            }
                            Err(e) => log::error!("❌ Error cargando paciente: {}", e),
                        }
                    }
                    Ok(_) => {
                        not_found.set(true);
                        show_create.set(true);
                        // Los avisos se auto-ocultan en ventanas distintas;
                        // un nuevo check reinicia ambas.
                        let show_create_off = show_create.clone();
                        create_deadline
                            .borrow_mut()
                            .schedule(CREATE_SHORTCUT_VISIBLE_MS, move || {
                                show_create_off.set(false);
                            });
                        let not_found_off = not_found.clone();
                        notice_deadline
                            .borrow_mut()
                            .schedule(NOT_FOUND_NOTICE_MS, move || {
                                not_found_off.set(false);
                            });
                    }
                    Err(e) => {
                        // Fallo local de la página: no toca sesión ni layout.
                        log::error!("❌ Check NRIC falló: {}", e);
                    }
                }
            });
        })
    };

    let on_create_patient = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::PatientRegister);
            }
        })
    };

    let tab_buttons = tabs
        .iter()
        .map(|&candidate| {
            let on_select_tab = props.on_select_tab.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_select_tab.emit(candidate));
            html! {
                <button
                    key={candidate.label()}
                    class={classes!("tab-button", (candidate == tab).then_some("active"))}
                    onclick={onclick}
                >
                    { candidate.label() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="dashboard">
            <div class="dashboard-tabs">{ tab_buttons }</div>

            {
                match tab {
                    DashboardTab::Patient => html! {
                        <div class="dashboard-grid">
                            <div class="dashboard-column">
                                <PatientCountWidget />
                            </div>

                            <div class="dashboard-column">
                                <div class="check-card">
                                    <div class="check-row">
                                        <input
                                            type="text"
                                            placeholder="Enter NRIC / Passport Number"
                                            value={(*nric).clone()}
                                            oninput={on_nric_input}
                                        />
                                        <button class="btn-check" onclick={on_check}>{"Check"}</button>
                                    </div>

                                    if *not_found {
                                        <div class="not-found-notice">{"No Patient Record Found"}</div>
                                    }
                                    if *show_create {
                                        <button class="btn-create-patient" onclick={on_create_patient}>
                                            {"+ Create Patient"}
                                        </button>
                                    }
                                    if let Some(found) = &*patient {
                                        <PatientCard patient={found.clone()} />
                                    }
                                </div>
                            </div>

                            <div class="dashboard-column">
                                <PatientList />
                            </div>
                        </div>
                    },
                    DashboardTab::Doctor => html! { <DoctorPanel /> },
                }
            }
        </div>
    }
}
