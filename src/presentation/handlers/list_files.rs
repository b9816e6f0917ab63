use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::MediaFolder;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ListFilesResponse {
    pub status: String,
    pub videos: Vec<String>,
    pub audio_files: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_files_handler(State(state): State<AppState>) -> impl IntoResponse {
    let videos = match state.media_store.list(MediaFolder::Videos).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list videos folder");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let audio_files = match state.media_store.list(MediaFolder::Audio).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list audio folder");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(ListFilesResponse {
            status: "success".to_string(),
            videos,
            audio_files,
        }),
    )
        .into_response()
}
