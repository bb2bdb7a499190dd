//! Prediction service wire types.

use flora_models::{GeoPoint, Prediction};
use serde::{Deserialize, Serialize};

/// Response body returned by `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted plant label.
    pub predicted_label: String,
    /// Confidence as a fraction in [0, 1].
    pub confidence: f64,
    /// Class index in the service's label map.
    pub predicted_class: Option<i64>,
    /// Plant location from the service's dataset lookup.
    pub location: Option<WireLocation>,
}

/// Location as returned by the service. Either coordinate may be null when
/// the dataset lookup failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WireLocation {
    /// Collapse to a concrete point only when both coordinates are present.
    pub fn into_point(self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

impl From<PredictResponse> for Prediction {
    fn from(response: PredictResponse) -> Self {
        Prediction {
            label: response.predicted_label,
            confidence: response.confidence,
            class_index: response.predicted_class,
            location: response.location.and_then(WireLocation::into_point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_response() {
        let json = r#"{
            "predicted_class": 3,
            "predicted_label": "Rose",
            "confidence": 0.87,
            "location": {"latitude": 12.97, "longitude": 77.59}
        }"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        let prediction = Prediction::from(response);

        assert_eq!(prediction.label, "Rose");
        assert_eq!(prediction.class_index, Some(3));
        let location = prediction.location.unwrap();
        assert_eq!(location.latitude, 12.97);
        assert_eq!(location.longitude, 77.59);
    }

    #[test]
    fn test_null_coordinates_collapse_to_no_location() {
        let json = r#"{
            "predicted_label": "Rose",
            "confidence": 0.5,
            "location": {"latitude": null, "longitude": null}
        }"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(Prediction::from(response).location.is_none());
    }

    #[test]
    fn test_one_missing_coordinate_collapses_to_no_location() {
        let location = WireLocation {
            latitude: Some(12.97),
            longitude: None,
        };
        assert!(location.into_point().is_none());
    }

    #[test]
    fn test_missing_location_field_is_tolerated() {
        let json = r#"{"predicted_label":"Rose","confidence":0.5}"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(Prediction::from(response).location.is_none());
    }
}
