// ============================================================================
// UI MODELS - Estado transversal del shell
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusColor {
    Green,
    Red,
}

impl StatusColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusColor::Green => "status-green",
            StatusColor::Red => "status-red",
        }
    }
}

/// Mensaje que sustituye al contenido ruteado cuando el Layout está en modo
/// override. Gana siempre la última escritura; None restaura la ruta.
#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub color: StatusColor,
}

impl StatusMessage {
    pub fn green(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: StatusColor::Green,
        }
    }

    pub fn red(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: StatusColor::Red,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DashboardTab {
    Patient,
    Doctor,
}

impl DashboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Patient => "Patient Dashboard",
            DashboardTab::Doctor => "Doctor Dashboard",
        }
    }
}

/// Pestañas visibles según el rol de la sesión: admin ve ambas, doctor la
/// suya, y cualquier otro rol de mostrador opera el flujo de pacientes.
pub fn allowed_tabs(role: &str) -> Vec<DashboardTab> {
    match role.to_ascii_lowercase().as_str() {
        "admin" => vec![DashboardTab::Patient, DashboardTab::Doctor],
        "doctor" => vec![DashboardTab::Doctor],
        _ => vec![DashboardTab::Patient],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_both_tabs() {
        assert_eq!(
            allowed_tabs("Admin"),
            vec![DashboardTab::Patient, DashboardTab::Doctor]
        );
    }

    #[test]
    fn doctor_sees_only_doctor_tab() {
        assert_eq!(allowed_tabs("doctor"), vec![DashboardTab::Doctor]);
    }

    #[test]
    fn patient_and_front_desk_roles_see_patient_tab() {
        assert_eq!(allowed_tabs("patient"), vec![DashboardTab::Patient]);
        assert_eq!(allowed_tabs("Staff"), vec![DashboardTab::Patient]);
        assert_eq!(allowed_tabs(""), vec![DashboardTab::Patient]);
    }
}
