pub mod controller;
pub mod countdown;
pub mod form_validation;
pub mod types;

pub use controller::*;
pub use countdown::{countdown, CountdownGuard};
pub use form_validation::*;
pub use types::*;
