use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{NewPatient, NricCheckResponse, Patient};

fn patients_url() -> String {
    format!("{}/api/patient", CONFIG.api_base_url())
}

/// Comprueba si existe un paciente con ese NRIC.
pub async fn check_nric(nric: &str) -> Result<NricCheckResponse, String> {
    let url = format!("{}/check-nric?nric={}", patients_url(), nric);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<NricCheckResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn get_by_nric(nric: &str) -> Result<Patient, String> {
    let url = format!("{}/get-by-nric?nric={}", patients_url(), nric);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Patient>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn get_all_patients() -> Result<Vec<Patient>, String> {
    let url = format!("{}/getallpatients", patients_url());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Patient>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_patient(patient: &NewPatient) -> Result<Patient, String> {
    let url = format!("{}/create", patients_url());
    let response = Request::post(&url)
        .json(patient)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP error {}: {}", status, error_text));
    }

    response
        .json::<Patient>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
