//! Prediction domain types.

use serde::{Deserialize, Serialize};

/// A geographic point. Both coordinates are present by construction;
/// a plant whose dataset lookup failed has no `GeoPoint` at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// An image selected for identification.
///
/// The bytes are opaque; no type or size validation happens here. A new
/// selection replaces the previous one wholesale.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, as chosen by the user.
    pub file_name: String,
    /// MIME type reported by the upload, if any.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A classification returned by the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted plant label.
    pub label: String,
    /// Confidence as a fraction in [0, 1].
    pub confidence: f64,
    /// Class index in the service's label map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_index: Option<i64>,
    /// Where the plant grows, when the dataset lookup succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_replaces_nothing_by_default() {
        let upload = ImageUpload::new("rose.jpg", vec![1, 2, 3]);
        assert_eq!(upload.file_name, "rose.jpg");
        assert!(upload.content_type.is_none());
        assert!(!upload.is_empty());
    }

    #[test]
    fn test_upload_with_content_type() {
        let upload = ImageUpload::new("rose.jpg", vec![1]).with_content_type("image/jpeg");
        assert_eq!(upload.content_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_prediction_location_is_optional() {
        let json = r#"{"label":"Rose","confidence":0.87}"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert!(prediction.location.is_none());
        assert!(prediction.class_index.is_none());
    }
}
