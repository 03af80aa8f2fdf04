pub mod auth_service;
pub mod doctor_service;
pub mod patient_service;
pub mod user_service;
