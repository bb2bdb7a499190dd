//! Identify handler: the server half of an upload-and-classify submission.

use axum::extract::{Multipart, State};
use axum::Json;
use flora_ml_client::IMAGE_FIELD;
use flora_models::{ImageUpload, ResultView};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Accept one uploaded image, forward it to the prediction service, and
/// return the render data for the result.
pub async fn identify(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ResultView>> {
    let upload = extract_image(&mut multipart).await?;

    info!(
        file = %upload.file_name,
        bytes = upload.bytes.len(),
        "Classifying upload"
    );

    let prediction = match state.predictor.predict(upload).await {
        Ok(prediction) => prediction,
        Err(e) => {
            warn!("Prediction request failed: {}", e);
            return Err(e.into());
        }
    };

    info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        has_location = prediction.location.is_some(),
        "Prediction received"
    );

    Ok(Json(ResultView::from(&prediction)))
}

/// Pull the image part out of the multipart body.
///
/// A missing or empty part aborts the submission before any upstream call.
async fn extract_image(multipart: &mut Multipart) -> Result<ImageUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("unreadable multipart body: {e}")))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(|m| m.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(ApiError::NoFileSelected);
        }

        let mut upload = ImageUpload::new(file_name, bytes.to_vec());
        if let Some(content_type) = content_type {
            upload = upload.with_content_type(content_type);
        }
        return Ok(upload);
    }

    Err(ApiError::NoFileSelected)
}
