// ============================================================================
// PATIENT REGISTER - Alta de paciente con DOB derivada del NRIC
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::IdleDeadline;
use crate::models::{NewPatient, StatusMessage};
use crate::routes::RegisterPrefill;
use crate::services::patient_service;
use crate::utils::nric::derive_dob_string;

const IC_TYPES: [&str; 3] = ["NRIC", "Passport", "Other"];
const RACES: [&str; 5] = ["", "Malay", "Chinese", "Indian", "Other"];

/// Callback de input que aplica el valor tecleado a un campo del
/// formulario. El puntero a función evita clonar un closure por campo.
fn bind_field(
    data: &UseStateHandle<NewPatient>,
    apply: fn(&mut NewPatient, String),
) -> Callback<InputEvent> {
    let data = data.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*data).clone();
        apply(&mut next, input.value());
        data.set(next);
    })
}

#[function_component(PatientRegister)]
pub fn patient_register() -> Html {
    let data = use_state(NewPatient::initial);
    let dob = use_state(String::new);
    let loading = use_state(|| false);
    let message = use_state(|| None::<StatusMessage>);
    let missing = use_state(Vec::<&'static str>::new);
    let dismiss_deadline = use_mut_ref(IdleDeadline::new);
    let name_ref = use_node_ref();

    let location = use_location();

    // Estado de ruta del Header (NRIC no encontrado): se consume una vez
    // al montar; las navegaciones normales llegan sin estado.
    {
        let data = data.clone();
        let dob = dob.clone();
        let name_ref = name_ref.clone();
        let prefill = location.and_then(|loc| loc.state::<RegisterPrefill>());
        use_effect_with((), move |_| {
            if let Some(prefill) = prefill {
                let mut next = (*data).clone();
                next.nric = prefill.nric.clone();
                data.set(next);
                if let Some(derived) = derive_dob_string(&prefill.nric) {
                    dob.set(derived);
                }
                if prefill.focus_field == "fullName" {
                    if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
            }
            || ()
        });
    }

    let is_nric = data.ic_type == "NRIC";

    let on_nric_input = {
        let data = data.clone();
        let dob = dob.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            match derive_dob_string(&value) {
                Some(derived) => dob.set(derived),
                None => dob.set(String::new()),
            }
            let mut next = (*data).clone();
            next.nric = value;
            data.set(next);
        })
    };

    let on_ic_type_change = {
        let data = data.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.apply_ic_type(&select.value());
            data.set(next);
        })
    };

    let on_race_change = {
        let data = data.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.race = select.value();
            data.set(next);
        })
    };

    let on_dob_input = {
        let dob = dob.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dob.set(input.value());
        })
    };

    let on_submit = {
        let data = data.clone();
        let dob = dob.clone();
        let loading = loading.clone();
        let message = message.clone();
        let missing = missing.clone();
        let dismiss_deadline = dismiss_deadline.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let required = data.missing_required_fields();
            if !required.is_empty() {
                missing.set(required);
                return;
            }
            missing.set(Vec::new());
            loading.set(true);
            message.set(None);

            let mut payload = (*data).clone();
            payload.dob = (*dob).clone();

            let loading = loading.clone();
            let message = message.clone();
            let dismiss_deadline = dismiss_deadline.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::create_patient(&payload).await {
                    Ok(created) => {
                        log::info!("✅ Paciente registrado: {}", created.patient_name);
                        message.set(Some(StatusMessage::green("Patient registered successfully!")));
                        let message_off = message.clone();
                        dismiss_deadline
                            .borrow_mut()
                            .schedule(CONFIG.ui_config.status_dismiss_ms, move || {
                                message_off.set(None);
                            });
                    }
                    Err(e) => {
                        log::error!("❌ Error registrando paciente: {}", e);
                        message.set(Some(StatusMessage::red(
                            "Failed to register patient. Please try again.",
                        )));
                    }
                }
                loading.set(false);
            });
        })
    };

    let required_error = |field: &'static str| -> Html {
        if missing.contains(&field) {
            html! { <span class="field-error">{"This field is required"}</span> }
        } else {
            Html::default()
        }
    };

    html! {
        <div class="patient-register">
            <h1>{"Patient Registration"}</h1>

            if let Some(status) = &*message {
                <div class={classes!("form-message", status.color.css_class())}>
                    { &status.text }
                </div>
            }

            <form class="register-form" onsubmit={on_submit}>
                <h2>{"Patient Information"}</h2>
                <div class="form-grid">
                    <div class="form-group">
                        <label>{"Patient Name"}</label>
                        <input
                            type="text"
                            ref={name_ref.clone()}
                            value={data.patient_name.clone()}
                            oninput={bind_field(&data, |d, v| d.patient_name = v)}
                        />
                        { required_error("PatientName") }
                    </div>

                    <div class="form-group">
                        <label>{"Blood Group"}</label>
                        <input
                            type="text"
                            value={data.blood_group.clone()}
                            oninput={bind_field(&data, |d, v| d.blood_group = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"IC Type"}</label>
                        <select onchange={on_ic_type_change}>
                            { for IC_TYPES.iter().map(|ic_type| html! {
                                <option value={*ic_type} selected={data.ic_type == *ic_type}>
                                    {*ic_type}
                                </option>
                            }) }
                        </select>
                        { required_error("ICType") }
                    </div>

                    <div class="form-group">
                        <label>{"NRIC / ID Number"}</label>
                        <input
                            type="text"
                            placeholder="e.g. 991231145678"
                            value={data.nric.clone()}
                            oninput={on_nric_input}
                        />
                        { required_error("NRIC") }
                    </div>

                    <div class="form-group">
                        <label>{"Date of Birth"}</label>
                        // Con NRIC la fecha sale de los seis primeros
                        // dígitos y el campo queda de solo lectura.
                        <input
                            type="date"
                            value={(*dob).clone()}
                            readonly={is_nric}
                            oninput={on_dob_input}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Nationality"}</label>
                        <input
                            type="text"
                            value={data.nationality.clone()}
                            readonly={is_nric}
                            oninput={bind_field(&data, |d, v| d.nationality = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Religion"}</label>
                        <input
                            type="text"
                            value={data.religion.clone()}
                            oninput={bind_field(&data, |d, v| d.religion = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Race"}</label>
                        <select onchange={on_race_change}>
                            { for RACES.iter().map(|race| html! {
                                <option value={*race} selected={data.race == *race}>{*race}</option>
                            }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Language"}</label>
                        <input
                            type="text"
                            value={data.language.clone()}
                            oninput={bind_field(&data, |d, v| d.language = v)}
                        />
                    </div>
                </div>

                <h2>{"Address & Contact"}</h2>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Address Line 1"
                        value={data.address1.clone()}
                        oninput={bind_field(&data, |d, v| d.address1 = v)}
                    />
                    <input
                        type="text"
                        placeholder="Address Line 2"
                        value={data.address2.clone()}
                        oninput={bind_field(&data, |d, v| d.address2 = v)}
                    />
                    <input
                        type="text"
                        placeholder="Address Line 3"
                        value={data.address3.clone()}
                        oninput={bind_field(&data, |d, v| d.address3 = v)}
                    />
                    <input
                        type="text"
                        placeholder="State"
                        value={data.state.clone()}
                        oninput={bind_field(&data, |d, v| d.state = v)}
                    />
                    <input
                        type="text"
                        placeholder="Country"
                        value={data.country.clone()}
                        readonly={is_nric}
                        oninput={bind_field(&data, |d, v| d.country = v)}
                    />
                    <input
                        type="text"
                        placeholder="Pin Code"
                        value={data.pin_code.clone()}
                        oninput={bind_field(&data, |d, v| d.pin_code = v)}
                    />
                    <input
                        type="text"
                        placeholder="Phone Number 1"
                        value={data.ph1.clone()}
                        oninput={bind_field(&data, |d, v| d.ph1 = v)}
                    />
                    <input
                        type="text"
                        placeholder="Phone Number 2"
                        value={data.ph2.clone()}
                        oninput={bind_field(&data, |d, v| d.ph2 = v)}
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        value={data.email.clone()}
                        oninput={bind_field(&data, |d, v| d.email = v)}
                    />
                </div>

                <h2>{"Relative Information"}</h2>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Relative Name"
                        value={data.relative_name1.clone()}
                        oninput={bind_field(&data, |d, v| d.relative_name1 = v)}
                    />
                    <input
                        type="text"
                        placeholder="Relationship"
                        value={data.relationship1.clone()}
                        oninput={bind_field(&data, |d, v| d.relationship1 = v)}
                    />
                    <input
                        type="text"
                        placeholder="Relative ID"
                        value={data.relative_id1.clone()}
                        oninput={bind_field(&data, |d, v| d.relative_id1 = v)}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled={*loading}>
                        { if *loading { "Saving..." } else { "Register Patient" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
