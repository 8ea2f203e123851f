//! Server core functionality
//!
//! This module contains the HTTP server, its routes and the shared state
//! injected into request handlers.

pub mod core;
pub mod routes;
pub mod state;

pub use core::Server;
pub use routes::build_router;
pub use state::AppState;
