use serde::{Deserialize, Serialize};

/// Miembro del personal (usuario del sistema) administrado desde la consola.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

fn default_role() -> String {
    "Staff".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for User {
    fn default() -> Self {
        Self {
            user_id: None,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: default_role(),
            is_active: true,
            created_by: None,
        }
    }
}

/// Respuesta del alta de usuario: el backend genera las credenciales.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Perfil de doctor creado junto al usuario cuando el rol es Doctor.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub user_id: String,
    pub specialization: String,
    pub availability: String,
    pub qualification: String,
    pub experience_years: u32,
    pub bio: String,
    pub photo_url: String,
}

impl NewDoctor {
    /// Perfil vacío asociado al usuario recién creado; los datos clínicos
    /// se completan después desde la propia consola.
    pub fn empty_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }
}

/// Filtro en cliente de la búsqueda de doctores: coincide por nombre o por
/// especialización, sin distinguir mayúsculas.
pub fn filter_doctors(doctors: &[Doctor], term: &str) -> Vec<Doctor> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return doctors.to_vec();
    }
    doctors
        .iter()
        .filter(|doc| {
            doc.full_name.to_lowercase().contains(&term)
                || doc
                    .specialization
                    .as_deref()
                    .map(|s| s.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: &str, specialization: Option<&str>) -> Doctor {
        Doctor {
            doctor_id: Some(1),
            full_name: name.to_string(),
            specialization: specialization.map(|s| s.to_string()),
            availability: None,
        }
    }

    #[test]
    fn filter_matches_name_or_specialization() {
        let doctors = vec![
            doctor("Rajeev Menon", Some("General Medicine")),
            doctor("Sara Khan", Some("Cardiology")),
            doctor("David John", None),
        ];

        let by_name = filter_doctors(&doctors, "sara");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].full_name, "Sara Khan");

        let by_specialization = filter_doctors(&doctors, "cardio");
        assert_eq!(by_specialization.len(), 1);

        // Sin especialización no revienta, simplemente no coincide
        let none = filter_doctors(&doctors, "neuro");
        assert!(none.is_empty());
    }

    #[test]
    fn blank_term_returns_everything() {
        let doctors = vec![doctor("A", None), doctor("B", None)];
        assert_eq!(filter_doctors(&doctors, "  ").len(), 2);
    }
}
