pub mod account;
pub mod login;
pub mod verification;

pub use account::check_login_impl;
pub use login::{interpret_login_body, login_impl};
pub use verification::request_verification_code_impl;
