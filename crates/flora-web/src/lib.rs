//! Axum web application for FloraFind.
//!
//! This crate provides:
//! - The single-page upload form (embedded HTML, Leaflet map)
//! - The identify endpoint that forwards uploads to the prediction service
//! - A health probe

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod state;

pub use config::WebConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
