use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

/// Respuesta del endpoint de login. El backend no es contractualmente
/// estable entre snapshots (userId llega como número o como string), así
/// que todos los campos son tolerantes.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Token utilizable, o None si vino ausente o vacío.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// userId normalizado a string, venga como número o como string JSON.
    pub fn user_id_string(&self) -> String {
        match &self.user_id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_normalizes_number_and_string() {
        let numeric: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","userId":42,"role":"Admin"}"#).unwrap();
        assert_eq!(numeric.user_id_string(), "42");

        let textual: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","userId":"U042"}"#).unwrap();
        assert_eq!(textual.user_id_string(), "U042");

        let absent: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(absent.user_id_string(), "");
    }

    #[test]
    fn empty_token_is_not_usable() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert_eq!(response.token(), None);

        let missing: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.token(), None);
    }
}
