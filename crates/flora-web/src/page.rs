//! Embedded static HTML for the upload form page.
//!
//! Kept as a `&'static str` so it can be bundled directly inside the binary
//! without filesystem lookups. Leaflet and the OSM tiles come from their
//! public CDNs; everything the page renders for a result arrives precomputed
//! from `POST /api/identify`.

pub const UPLOAD_PAGE_HTML: &str = r##"<!doctype html>
<html lang="en">

<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>FloraFind</title>

  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js"
    crossorigin="anonymous" referrerpolicy="no-referrer"></script>

  <style>
    body {
      margin: 0;
      font-family: system-ui, sans-serif;
      background: #f4f7f4;
      color: #1f2d24;
    }

    .upload-form {
      max-width: 640px;
      margin: 0 auto;
      padding: 24px 16px 48px;
    }

    h1 { font-size: 1.6rem; }

    form {
      display: flex;
      gap: 12px;
      align-items: center;
      flex-wrap: wrap;
    }

    button {
      padding: 8px 16px;
      border: none;
      border-radius: 6px;
      background: #2f6f4f;
      color: #fff;
      cursor: pointer;
    }

    button:disabled {
      background: #9ab5a6;
      cursor: wait;
    }

    .error {
      color: #a4262c;
      background: #fbeaea;
      padding: 8px 12px;
      border-radius: 6px;
    }

    .notice { color: #a4262c; }

    #map {
      height: 400px;
      width: 100%;
      margin-top: 20px;
    }

    #nav-link { color: #007bff; }
  </style>
</head>

<body>
  <main class="upload-form">
    <h1>Plant Classifier</h1>

    <form id="upload-form">
      <input id="file-input" type="file" accept="image/*" />
      <button id="submit-btn" type="submit">Upload and Classify</button>
    </form>

    <p id="error-banner" class="error" hidden></p>

    <section id="result" hidden>
      <h3>Result:</h3>
      <p><strong>Plant:</strong> <span id="result-label"></span></p>
      <p><strong>Confidence:</strong> <span id="result-confidence"></span>%</p>
      <div id="map" hidden></div>
      <p id="location-notice" class="notice" hidden></p>
      <p><a id="nav-link" target="_blank" rel="noopener noreferrer" hidden>Navigate to plant</a></p>
    </section>
  </main>

  <script>
    const TILE_URL = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    const TILE_ATTRIBUTION = "&copy; OpenStreetMap contributors";

    const form = document.getElementById("upload-form");
    const fileInput = document.getElementById("file-input");
    const submitBtn = document.getElementById("submit-btn");
    const errorBanner = document.getElementById("error-banner");
    const resultSection = document.getElementById("result");
    const labelEl = document.getElementById("result-label");
    const confidenceEl = document.getElementById("result-confidence");
    const mapEl = document.getElementById("map");
    const noticeEl = document.getElementById("location-notice");
    const navLink = document.getElementById("nav-link");

    let map = null;
    let tiles = null;
    let marker = null;
    let loading = false;

    form.addEventListener("submit", async (event) => {
      event.preventDefault();

      const file = fileInput.files[0];
      if (!file) {
        alert("Please select a file.");
        return;
      }
      if (loading) return;

      setLoading(true);
      hideError();

      const data = new FormData();
      data.append("image", file);

      try {
        const response = await fetch("/api/identify", { method: "POST", body: data });
        const body = await response.json();
        if (!response.ok) {
          // keep the previous result on screen
          showError(body.detail || "Prediction failed.");
          return;
        }
        renderResult(body);
      } catch (err) {
        console.error("Prediction error:", err);
        showError("Could not reach the server.");
      } finally {
        setLoading(false);
      }
    });

    function setLoading(value) {
      loading = value;
      submitBtn.disabled = value;
      submitBtn.textContent = value ? "Classifying..." : "Upload and Classify";
    }

    function showError(detail) {
      errorBanner.textContent = detail;
      errorBanner.hidden = false;
    }

    function hideError() {
      errorBanner.hidden = true;
    }

    function renderResult(view) {
      resultSection.hidden = false;
      labelEl.textContent = view.label;
      confidenceEl.textContent = view.confidence_percent;

      if (view.map) {
        renderMap(view.map);
      } else {
        mapEl.hidden = true;
        navLink.hidden = true;
        noticeEl.textContent = view.location_notice;
        noticeEl.hidden = false;
      }
    }

    function renderMap(mapView) {
      noticeEl.hidden = true;
      mapEl.hidden = false;

      const center = [mapView.center.latitude, mapView.center.longitude];
      if (!map) {
        map = L.map("map", { scrollWheelZoom: false });
        tiles = L.tileLayer(TILE_URL, { attribution: TILE_ATTRIBUTION });
        tiles.addTo(map);
      }
      map.invalidateSize();
      map.setView(center, mapView.zoom);

      const popup = mapView.label
        + "<br>Lat: " + mapView.center.latitude
        + "<br>Lng: " + mapView.center.longitude;
      if (!marker) {
        marker = L.marker(center).addTo(map);
      } else {
        marker.setLatLng(center);
      }
      marker.bindPopup(popup);

      navLink.href = mapView.navigation_url;
      navLink.hidden = false;
    }
  </script>
</body>

</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_carries_the_form_and_map_plumbing() {
        assert!(UPLOAD_PAGE_HTML.contains("id=\"upload-form\""));
        assert!(UPLOAD_PAGE_HTML.contains("Please select a file."));
        assert!(UPLOAD_PAGE_HTML.contains("tile.openstreetmap.org"));
        assert!(UPLOAD_PAGE_HTML.contains("OpenStreetMap contributors"));
        assert!(UPLOAD_PAGE_HTML.contains("/api/identify"));
    }
}
