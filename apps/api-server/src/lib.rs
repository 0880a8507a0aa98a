//! # Quill API Server
//!
//! Actix-web application serving the `/api/posts` resource.
//! The binary in `main.rs` wires these modules together; integration tests
//! build the same routes against an in-memory store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;
