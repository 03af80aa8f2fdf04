pub mod admin_console;
pub mod app;
pub mod dashboard;
pub mod doctor_panel;
pub mod header;
pub mod layout;
pub mod loader;
pub mod login;
pub mod logo_header;
pub mod new_appointment;
pub mod patient_card;
pub mod patient_count_widget;
pub mod patient_list;
pub mod patient_register;
pub mod require_auth;
pub mod sidebar;
pub mod status_panel;

pub use admin_console::AdminConsole;
pub use app::App;
pub use dashboard::Dashboard;
pub use doctor_panel::DoctorPanel;
pub use header::Header;
pub use layout::Layout;
pub use loader::{PageLoader, SplashLoader};
pub use login::Login;
pub use logo_header::LogoHeader;
pub use new_appointment::NewAppointment;
pub use patient_card::PatientCard;
pub use patient_count_widget::PatientCountWidget;
pub use patient_list::PatientList;
pub use patient_register::PatientRegister;
pub use require_auth::RequireAuth;
pub use sidebar::Sidebar;
pub use status_panel::StatusPanel;
