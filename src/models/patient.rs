use serde::{Deserialize, Serialize};

/// Paciente tal como lo devuelve el backend. Las formas de payload varían
/// entre despliegues, por eso casi todo es opcional con default.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub nric: String,
    #[serde(default)]
    pub ic_type: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ph1: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct NricCheckResponse {
    #[serde(default)]
    pub exists: bool,
}

/// Alta de paciente. El backend espera las claves en PascalCase, con las
/// siglas en mayúsculas tal cual (NRIC, PH1, EMail, DOB).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NewPatient {
    pub patient_name: String,
    pub blood_group: String,
    #[serde(rename = "ICType")]
    pub ic_type: String,
    #[serde(rename = "NRIC")]
    pub nric: String,
    pub nationality: String,
    pub religion: String,
    pub race: String,
    pub language: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub state: String,
    pub country: String,
    pub pin_code: String,
    #[serde(rename = "PH1")]
    pub ph1: String,
    #[serde(rename = "PH2")]
    pub ph2: String,
    #[serde(rename = "RelativeID1")]
    pub relative_id1: String,
    pub relative_name1: String,
    pub relationship1: String,
    #[serde(rename = "EMail")]
    pub email: String,
    #[serde(rename = "DOB")]
    pub dob: String,
}

impl NewPatient {
    /// Valores iniciales del formulario: tipo de documento NRIC con
    /// nacionalidad y país por defecto.
    pub fn initial() -> Self {
        Self {
            ic_type: "NRIC".to_string(),
            nationality: "Malaysian".to_string(),
            country: "Malaysia".to_string(),
            ..Default::default()
        }
    }

    /// Al cambiar el tipo de documento se resetean nacionalidad y país:
    /// NRIC implica los valores locales, cualquier otro tipo los deja vacíos
    /// para entrada manual.
    pub fn apply_ic_type(&mut self, ic_type: &str) {
        self.ic_type = ic_type.to_string();
        if ic_type == "NRIC" {
            self.nationality = "Malaysian".to_string();
            self.country = "Malaysia".to_string();
        } else {
            self.nationality = String::new();
            self.country = String::new();
        }
    }

    /// Campos obligatorios que faltan, en orden de formulario.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient_name.trim().is_empty() {
            missing.push("PatientName");
        }
        if self.ic_type.trim().is_empty() {
            missing.push("ICType");
        }
        if self.nric.trim().is_empty() {
            missing.push("NRIC");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ic_type_switch_resets_defaults() {
        let mut form = NewPatient::initial();
        assert_eq!(form.nationality, "Malaysian");
        assert_eq!(form.country, "Malaysia");

        form.apply_ic_type("Passport");
        assert_eq!(form.nationality, "");
        assert_eq!(form.country, "");

        form.apply_ic_type("NRIC");
        assert_eq!(form.nationality, "Malaysian");
        assert_eq!(form.country, "Malaysia");
    }

    #[test]
    fn required_field_validation() {
        let mut form = NewPatient::initial();
        assert_eq!(form.missing_required_fields(), vec!["PatientName", "NRIC"]);

        form.patient_name = "Tan Ah Kow".to_string();
        form.nric = "991231145678".to_string();
        assert!(form.missing_required_fields().is_empty());
    }

    #[test]
    fn new_patient_serializes_backend_keys() {
        let mut form = NewPatient::initial();
        form.patient_name = "Tan Ah Kow".to_string();
        form.nric = "991231145678".to_string();
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"PatientName\""));
        assert!(json.contains("\"NRIC\""));
        assert!(json.contains("\"ICType\""));
        assert!(json.contains("\"DOB\""));
    }
}
