pub mod auth;
pub mod menu;
pub mod patient;
pub mod session;
pub mod ui;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use menu::{main_menu, MenuAction, MenuEntry, MenuLeaf};
pub use patient::{NewPatient, NricCheckResponse, Patient};
pub use session::{Session, StoredUser};
pub use ui::{allowed_tabs, DashboardTab, StatusColor, StatusMessage};
pub use user::{filter_doctors, CreatedUser, Doctor, NewDoctor, User};
