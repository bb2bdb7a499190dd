//! HTTP client for the plant prediction service.
//!
//! The service accepts one image as a multipart upload and returns the
//! predicted label, a confidence fraction, and the location where the plant
//! grows (when its dataset has one).

pub mod client;
pub mod error;
pub mod types;

pub use client::{PredictClient, PredictClientConfig, IMAGE_FIELD};
pub use error::{PredictError, PredictResult};
pub use types::{PredictResponse, WireLocation};
