use yew::prelude::*;

use crate::services::patient_service;

#[function_component(PatientCountWidget)]
pub fn patient_count_widget() -> Html {
    let count = use_state(|| 0usize);

    {
        let count = count.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::get_all_patients().await {
                    Ok(patients) => count.set(patients.len()),
                    Err(e) => log::error!("❌ Error obteniendo total de pacientes: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <div class="count-widget">
            <div>
                <p class="count-label">{"Total Patients"}</p>
                <p class="count-value">{ *count }</p>
            </div>
            <span class="count-icon">{"👥"}</span>
        </div>
    }
}
