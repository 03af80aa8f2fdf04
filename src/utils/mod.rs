// Utils compartidos

pub mod constants;
pub mod nric;
pub mod storage;

pub use constants::*;
pub use nric::{derive_dob, derive_dob_string};
pub use storage::*;
