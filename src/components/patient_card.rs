use yew::prelude::*;

use crate::models::Patient;

#[derive(Properties, PartialEq)]
pub struct PatientCardProps {
    pub patient: Patient,
}

#[function_component(PatientCard)]
pub fn patient_card(props: &PatientCardProps) -> Html {
    let patient = &props.patient;

    html! {
        <div class="patient-card">
            <h4>{ &patient.patient_name }</h4>
            <p>{ format!("{}: {}", patient.ic_type, patient.nric) }</p>
            if let Some(blood_group) = &patient.blood_group {
                <p>{ format!("Blood group: {}", blood_group) }</p>
            }
            if let Some(dob) = &patient.dob {
                <p>{ format!("Date of birth: {}", dob) }</p>
            }
            if let Some(nationality) = &patient.nationality {
                <p>{ format!("Nationality: {}", nationality) }</p>
            }
            if let Some(phone) = &patient.ph1 {
                <p>{ format!("Phone: {}", phone) }</p>
            }
        </div>
    }
}
