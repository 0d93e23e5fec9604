pub mod loading_indicator;
pub mod user_badge;

pub use loading_indicator::*;
pub use user_badge::*;
