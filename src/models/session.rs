use serde::{Deserialize, Serialize};

/// Identidad autenticada de la pestaña actual. La presencia de un token no
/// vacío es la única señal de autorización que consulta el route guard; no
/// se guarda ni se comprueba ninguna expiración del token en el cliente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub role: String,
}

/// Payload JSON persistido bajo la clave `user` en localStorage.
/// El token viaja aparte, como string crudo bajo la clave `token`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub role: String,
}
