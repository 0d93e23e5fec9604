pub mod login_screen;

pub use login_screen::*;
