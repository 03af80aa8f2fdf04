// ============================================================================
// ROUTES - Mapa de navegación de la app
// ============================================================================
// /login es la única ruta alcanzable sin sesión; todo lo demás pasa por
// RequireAuth y se renderiza dentro del Layout.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Layout, Login, RequireAuth};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/patient-register")]
    PatientRegister,
    #[at("/adminconsole")]
    AdminConsole,
    #[at("/new-appointment")]
    NewAppointment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Estado transitorio de navegación hacia el registro de pacientes.
/// Lo emite el Header cuando el NRIC buscado no existe; la página destino
/// lo consume una sola vez (las navegaciones posteriores llegan sin estado).
#[derive(Clone, PartialEq, Debug)]
pub struct RegisterPrefill {
    pub nric: String,
    pub focus_field: &'static str,
}

impl RegisterPrefill {
    pub fn new(nric: String) -> Self {
        Self {
            nric,
            focus_field: "fullName",
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        protected => html! {
            <RequireAuth>
                <Layout route={protected} />
            </RequireAuth>
        },
    }
}
