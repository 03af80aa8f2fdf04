use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Doctor, NewDoctor};

fn doctors_url() -> String {
    format!("{}/api/doctors", CONFIG.api_base_url())
}

pub async fn fetch_doctors() -> Result<Vec<Doctor>, String> {
    let response = Request::get(&doctors_url())
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Doctor>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Crea el perfil de doctor asociado a un usuario con rol Doctor.
pub async fn create_doctor(doctor: &NewDoctor) -> Result<(), String> {
    let response = Request::post(&doctors_url())
        .json(doctor)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
