/// Claves de localStorage del núcleo de sesión. Son exactamente dos; ninguna
/// otra clave forma parte del contrato del guard.
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Evento custom de window que pide al Layout alternar el sidebar.
/// Cualquier descendiente puede dispararlo sin prop drilling.
pub const TOGGLE_SIDEBAR_EVENT: &str = "toggleSidebar";

/// Señales de actividad que reinician la ventana de inactividad.
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "keydown", "click", "scroll", "touchstart"];
