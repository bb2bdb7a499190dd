//! Render data for the identify result.
//!
//! The web page is a thin renderer: everything it displays for a prediction
//! (rounded confidence, map center, navigation link, the location notice) is
//! computed here.

use serde::{Deserialize, Serialize};

use crate::prediction::{GeoPoint, Prediction};

/// Zoom level used when centering the map on a plant location.
pub const MAP_ZOOM: u8 = 15;

/// Notice shown when the dataset has no coordinates for the predicted plant.
pub const LOCATION_NOT_FOUND_NOTICE: &str = "Location not found in dataset.";

/// Round a confidence fraction to an integer percentage.
///
/// Half-up at percentage granularity: 0.873 -> 87, 0.876 -> 88.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Build the external navigation link for a location.
///
/// Opened by the page in a new browsing context; routing itself is Google
/// Maps' problem.
pub fn navigation_url(point: &GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        point.latitude, point.longitude
    )
}

/// Map render data: center, marker label, and the navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    /// Point the map is centered on; also the single marker position.
    pub center: GeoPoint,
    pub zoom: u8,
    /// Marker popup label; the page appends the coordinates.
    pub label: String,
    pub navigation_url: String,
}

impl MapView {
    pub fn new(label: impl Into<String>, center: GeoPoint) -> Self {
        Self {
            center,
            zoom: MAP_ZOOM,
            label: label.into(),
            navigation_url: navigation_url(&center),
        }
    }
}

/// Everything the page shows for one prediction.
///
/// Exactly one of `map` and `location_notice` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    pub label: String,
    pub confidence_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_notice: Option<String>,
}

impl From<&Prediction> for ResultView {
    fn from(prediction: &Prediction) -> Self {
        let map = prediction
            .location
            .map(|center| MapView::new(prediction.label.clone(), center));
        let location_notice = match map {
            Some(_) => None,
            None => Some(LOCATION_NOT_FOUND_NOTICE.to_string()),
        };

        Self {
            label: prediction.label.clone(),
            confidence_percent: confidence_percent(prediction.confidence),
            map,
            location_notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(location: Option<GeoPoint>) -> Prediction {
        Prediction {
            label: "Rose".to_string(),
            confidence: 0.87,
            class_index: Some(3),
            location,
        }
    }

    #[test]
    fn test_confidence_rounds_half_up() {
        assert_eq!(confidence_percent(0.873), 87);
        assert_eq!(confidence_percent(0.876), 88);
        assert_eq!(confidence_percent(0.875), 88);
        assert_eq!(confidence_percent(0.87), 87);
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(1.2), 100);
        assert_eq!(confidence_percent(-0.1), 0);
    }

    #[test]
    fn test_navigation_url_from_coordinates() {
        let url = navigation_url(&GeoPoint {
            latitude: 12.97,
            longitude: 77.59,
        });
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=12.97,77.59"
        );
    }

    #[test]
    fn test_view_with_location_has_map() {
        let point = GeoPoint {
            latitude: 12.97,
            longitude: 77.59,
        };
        let view = ResultView::from(&prediction(Some(point)));

        assert_eq!(view.label, "Rose");
        assert_eq!(view.confidence_percent, 87);
        assert!(view.location_notice.is_none());

        let map = view.map.unwrap();
        assert_eq!(map.center, point);
        assert_eq!(map.zoom, MAP_ZOOM);
        assert_eq!(map.label, "Rose");
        assert!(map.navigation_url.ends_with("destination=12.97,77.59"));
    }

    #[test]
    fn test_view_without_location_has_notice() {
        let view = ResultView::from(&prediction(None));

        assert_eq!(view.label, "Rose");
        assert!(view.map.is_none());
        assert_eq!(
            view.location_notice.as_deref(),
            Some(LOCATION_NOT_FOUND_NOTICE)
        );
    }

    #[test]
    fn test_zero_coordinates_are_a_real_location() {
        // (0, 0) is in the Gulf of Guinea, not "missing"
        let view = ResultView::from(&prediction(Some(GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        })));
        assert!(view.map.is_some());
        assert!(view.location_notice.is_none());
    }

    #[test]
    fn test_view_serialization_omits_absent_half() {
        let view = ResultView::from(&prediction(None));
        let value = serde_json::to_value(&view).unwrap();
        assert!(value.get("map").is_none());
        assert_eq!(
            value["location_notice"],
            serde_json::json!(LOCATION_NOT_FOUND_NOTICE)
        );
    }
}
