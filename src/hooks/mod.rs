pub mod idle_deadline;
pub mod session_context;
pub mod use_inactivity;
pub mod use_page_loader;

pub use idle_deadline::IdleDeadline;
pub use session_context::{use_session_store, SessionProvider};
pub use use_inactivity::use_inactivity_logout;
pub use use_page_loader::use_page_loader;
