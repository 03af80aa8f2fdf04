use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{filter_doctors, Doctor};
use crate::routes::Route;
use crate::services::doctor_service;

#[function_component(NewAppointment)]
pub fn new_appointment() -> Html {
    let doctors = use_state(Vec::<Doctor>::new);
    let search_term = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let on_search = {
        let doctors = doctors.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let doctors = doctors.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match doctor_service::fetch_doctors().await {
                    Ok(list) => {
                        log::info!("🩺 {} doctores disponibles", list.len());
                        doctors.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando doctores: {}", e);
                        error.set(Some("Could not load doctors.".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_term_input = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };

    let filtered = filter_doctors(&doctors, &search_term);

    html! {
        <div class="new-appointment">
            <h1>{"New Appointment"}</h1>

            <div class="appointment-actions">
                <button class="btn-primary" onclick={on_search}>
                    {"Search Available Doctors"}
                </button>
                <input
                    type="text"
                    placeholder="Search by name or specialization"
                    value={(*search_term).clone()}
                    oninput={on_term_input}
                />
                <button class="btn-secondary" onclick={on_back}>
                    {"Back to Dashboard"}
                </button>
            </div>

            if *loading {
                <p class="muted">{"Loading..."}</p>
            }
            if let Some(message) = &*error {
                <p class="field-error">{message}</p>
            }

            <div class="doctor-grid">
                if filtered.is_empty() && !*loading {
                    <p class="muted">{"No doctors found."}</p>
                } else {
                    { for filtered.iter().map(|doctor| html! {
                        <div class="doctor-card" key={doctor.doctor_id.unwrap_or_default()}>
                            <h3>{ &doctor.full_name }</h3>
                            <p>{ format!(
                                "Specialization: {}",
                                doctor.specialization.as_deref().unwrap_or("General")
                            ) }</p>
                            <p class="availability">{ format!(
                                "Availability: {}",
                                doctor.availability.as_deref().unwrap_or("Available")
                            ) }</p>
                        </div>
                    }) }
                }
            </div>
        </div>
    }
}
