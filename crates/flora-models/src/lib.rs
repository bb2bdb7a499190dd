//! Shared data models for FloraFind.
//!
//! This crate provides Serde-serializable types for:
//! - Predictions and plant locations
//! - Uploaded images
//! - Render data for the identify result (confidence percentage, map view)

pub mod prediction;
pub mod view;

// Re-export common types
pub use prediction::{GeoPoint, ImageUpload, Prediction};
pub use view::{
    confidence_percent, navigation_url, MapView, ResultView, LOCATION_NOT_FOUND_NOTICE, MAP_ZOOM,
};
