// ============================================================================
// PATIENT LIST - Listado con paginación en cliente
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Patient;
use crate::services::patient_service;

/// Total de páginas para un listado; una lista vacía sigue teniendo una
/// página (vacía) para que los botones no se salgan de rango.
fn total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.min(total_pages(len, per_page) - 1)
}

#[function_component(PatientList)]
pub fn patient_list() -> Html {
    let patients = use_state(Vec::<Patient>::new);
    let loading = use_state(|| true);
    let current_page = use_state(|| 0usize);

    {
        let patients = patients.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::get_all_patients().await {
                    Ok(list) => patients.set(list),
                    Err(e) => log::error!("❌ Error obteniendo pacientes: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let per_page = CONFIG.ui_config.items_per_page;
    let page = clamp_page(*current_page, patients.len(), per_page);
    let pages = total_pages(patients.len(), per_page);

    let on_prev = {
        let current_page = current_page.clone();
        Callback::from(move |_: MouseEvent| {
            current_page.set((*current_page).saturating_sub(1));
        })
    };

    let on_next = {
        let current_page = current_page.clone();
        let len = patients.len();
        Callback::from(move |_: MouseEvent| {
            current_page.set(clamp_page(*current_page + 1, len, per_page));
        })
    };

    let rows = patients
        .iter()
        .skip(page * per_page)
        .take(per_page)
        .map(|patient| {
            html! {
                <li key={patient.nric.clone()} class="patient-row">
                    <div class="patient-name">{ &patient.patient_name }</div>
                    <div class="patient-meta">
                        { format!("{}: {}", patient.ic_type, patient.nric) }
                        if let Some(blood_group) = &patient.blood_group {
                            { format!(" | {}", blood_group) }
                        }
                    </div>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="patient-list">
            <h3>{"Patient List"}</h3>

            if *loading {
                <p class="muted">{"Loading patients..."}</p>
            } else if patients.is_empty() {
                <p class="muted">{"No patients found."}</p>
            } else {
                <>
                    <ul>{ rows }</ul>
                    <div class="pagination">
                        <button onclick={on_prev} disabled={page == 0}>{"‹"}</button>
                        <span>{ format!("{} / {}", page + 1, pages) }</span>
                        <button onclick={on_next} disabled={page + 1 >= pages}>{"›"}</button>
                    </div>
                </>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_still_has_one_page() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(clamp_page(3, 0, 5), 0);
    }

    #[test]
    fn pages_round_up() {
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn page_clamps_to_last() {
        assert_eq!(clamp_page(0, 11, 5), 0);
        assert_eq!(clamp_page(2, 11, 5), 2);
        assert_eq!(clamp_page(9, 11, 5), 2);
    }
}
