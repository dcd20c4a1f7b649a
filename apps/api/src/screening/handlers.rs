use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::screening::report::{screen_text, DocumentSource, ScreeningReport};
use crate::screening::roles::{RoleRule, ROLE_RULES};
use crate::screening::taxonomy::{describe_taxonomy, CategoryTerms};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ScreenTextRequest {
    pub text: String,
}

/// POST /api/v1/screenings
/// Multipart upload; the PDF goes in the `file` field.
pub async fn handle_screen_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let document = field
            .bytes()
            .await
            .map_err(|e| AppError::UnprocessableEntity(format!("Could not read upload: {e}")))?;

        info!(file_name = %file_name, bytes = document.len(), "Received document");
        let text = state.extractor.extract(document).await?;
        return Ok(Json(screen_text(&text, DocumentSource::Pdf)));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// POST /api/v1/screenings/text
pub async fn handle_screen_text(
    Json(req): Json<ScreenTextRequest>,
) -> Result<Json<ScreeningReport>, AppError> {
    Ok(Json(screen_text(&req.text, DocumentSource::Text)))
}

/// GET /api/v1/taxonomy
pub async fn handle_get_taxonomy() -> Json<Vec<CategoryTerms>> {
    Json(describe_taxonomy())
}

/// GET /api/v1/roles
pub async fn handle_get_roles() -> Json<&'static [RoleRule]> {
    Json(&ROLE_RULES[..])
}
