//! Screen-level behaviour, independent of how it is rendered

pub mod login;
