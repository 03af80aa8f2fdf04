use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{CreatedUser, User};

fn users_url() -> String {
    format!("{}/api/users", CONFIG.api_base_url())
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = Request::get(&users_url())
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Alta de usuario: el backend devuelve las credenciales generadas.
pub async fn create_user(user: &User) -> Result<CreatedUser, String> {
    let url = format!("{}/create", users_url());
    let response = Request::post(&url)
        .json(user)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<CreatedUser>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_user(user_id: &str, user: &User) -> Result<(), String> {
    let url = format!("{}/{}", users_url(), user_id);
    let response = Request::put(&url)
        .json(user)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_user(user_id: &str) -> Result<(), String> {
    let url = format!("{}/{}", users_url(), user_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
