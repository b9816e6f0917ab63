use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::MediaStoreError;
use crate::domain::{MASTER_TRANSCRIPT_FILENAME, MediaFolder};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn download_audio_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    serve_file(&state, MediaFolder::Audio, &filename, "Audio file not found").await
}

#[tracing::instrument(skip(state))]
pub async fn download_video_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    serve_file(&state, MediaFolder::Videos, &filename, "Video file not found").await
}

#[tracing::instrument(skip(state))]
pub async fn download_transcription_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    serve_file(
        &state,
        MediaFolder::Transcriptions,
        &filename,
        "Transcription file not found",
    )
    .await
}

#[tracing::instrument(skip(state))]
pub async fn download_master_transcript_handler(
    State(state): State<AppState>,
) -> impl IntoResponse {
    serve_file(
        &state,
        MediaFolder::Transcriptions,
        MASTER_TRANSCRIPT_FILENAME,
        "Master transcript not found",
    )
    .await
}

async fn serve_file(
    state: &AppState,
    folder: MediaFolder,
    filename: &str,
    not_found_message: &str,
) -> Response {
    match state.media_store.stream(folder, filename).await {
        Ok(stream) => (
            [
                (
                    header::CONTENT_TYPE,
                    "application/octet-stream".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(MediaStoreError::NotFound(_)) | Err(MediaStoreError::InvalidName(_)) => {
            tracing::debug!(folder = %folder, filename = %filename, "Download of missing file");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: not_found_message.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, folder = %folder, "Failed to open file for download");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
