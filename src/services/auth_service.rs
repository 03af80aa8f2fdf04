use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse};

/// Login contra el backend. El único resultado relevante para la capa de
/// sesión es si la respuesta trae token.
pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, String> {
    let url = format!("{}/api/Auth/login", CONFIG.api_base_url());

    let response = Request::post(&url)
        .json(credentials)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Login failed".to_string());
        return Err(format!("HTTP error {}: {}", status, error_text));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
