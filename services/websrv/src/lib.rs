//! PepMix web service
//!
//! Serves the reconstitution calculator page and a health endpoint. All
//! domain logic lives in `pepmix-calc`; this crate only wires HTTP.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;

pub use app_state::AppState;
pub use config::Config;
pub use error::{Result, WebSrvError};
pub use routes::create_router;

/// Application name reported by the health endpoint.
pub const APP_NAME: &str = "pepmix";
