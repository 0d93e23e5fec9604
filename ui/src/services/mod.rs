//! Infrastructure Services
//!
//! This module provides the infrastructure behind the login screen:
//!
//! - **client**: HTTP client for the authentication backend, with CSRF handling
//! - **config**: API endpoints, cooldown and the navigation list
//! - **errors**: Configuration and login error types
//! - **user_info**: Shared holder for the authenticated user
//! - **browser**: Alert, navigation and task spawning seams
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod browser;
pub mod client;
pub mod config;
pub mod errors;
pub mod user_info;
