use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;

use crate::application::services::ExtractionError;
use crate::domain::sanitize_stem;
use crate::presentation::config::PipelineMode;
use crate::presentation::state::AppState;

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];
const AUDIO_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

#[derive(Serialize)]
pub struct ExtractAudioResponse {
    pub status: String,
    pub video_url: String,
    pub audio_url: String,
    pub video_filename: String,
    pub audio_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_url: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_audio_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<(String, Bytes)> = None;
    let mut custom_name: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(&format!("Failed to read multipart: {}", e));
            }
        };

        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file bytes");
                        return bad_request(&format!("Failed to read file: {}", e));
                    }
                };
                file = Some((filename, data));
            }
            Some("name") => {
                custom_name = match field.text().await {
                    Ok(t) => Some(t),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read name field");
                        return bad_request(&format!("Failed to read name field: {}", e));
                    }
                };
            }
            _ => {}
        }
    }

    let Some((original_filename, data)) = file else {
        tracing::warn!("Upload without a file part");
        return bad_request("No file uploaded");
    };

    if original_filename.is_empty() {
        return bad_request("No file selected");
    }

    // The stem may be empty (".mp4"); the stored name comes from the base anyway.
    let Some((_, extension)) = original_filename.rsplit_once('.') else {
        return bad_request("Invalid file type");
    };
    let extension = extension.to_ascii_lowercase();
    if !extension_allowed(state.mode, &extension) {
        tracing::warn!(filename = %original_filename, "Rejected upload extension");
        return bad_request("Invalid file type");
    }

    let requested_name = custom_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let base = match (requested_name, state.mode) {
        (Some(name), _) => {
            let base = sanitize_stem(name);
            if base.is_empty() {
                return bad_request("Invalid custom name");
            }
            base
        }
        (None, PipelineMode::Extract) => return bad_request("No custom name provided"),
        (None, PipelineMode::Transcribe) => {
            format!("recording_{}", Utc::now().format("%Y%m%d_%H%M%S"))
        }
    };

    tracing::debug!(
        filename = %original_filename,
        base = %base,
        bytes = data.len(),
        "Processing upload"
    );

    match state
        .extraction_service
        .process_upload(&base, &extension, &data)
        .await
    {
        Ok(outcome) => {
            let transcription_url = outcome
                .transcription
                .as_ref()
                .map(|t| format!("/api/download-transcription/{}", t.filename));
            let (transcription, transcription_filename) = match outcome.transcription {
                Some(t) => (Some(t.text), Some(t.filename)),
                None => (None, None),
            };

            (
                StatusCode::OK,
                Json(ExtractAudioResponse {
                    status: "success".to_string(),
                    video_url: format!("/api/videos/{}", outcome.video_filename),
                    audio_url: format!("/api/download/{}", outcome.audio_filename),
                    video_filename: outcome.video_filename,
                    audio_filename: outcome.audio_filename,
                    transcription,
                    transcription_filename,
                    transcription_url,
                }),
            )
                .into_response()
        }
        Err(ExtractionError::Transcode(e)) => {
            tracing::error!(error = %e, "ffmpeg run failed");
            server_error("FFmpeg processing failed", e.to_string())
        }
        Err(ExtractionError::Transcription(e)) => {
            tracing::error!(error = %e, "Transcription failed");
            server_error("Transcription failed", e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Upload processing failed");
            server_error("Server error", e.to_string())
        }
    }
}

fn extension_allowed(mode: PipelineMode, extension: &str) -> bool {
    match mode {
        PipelineMode::Extract => VIDEO_EXTENSIONS.contains(&extension),
        PipelineMode::Transcribe => {
            VIDEO_EXTENSIONS.contains(&extension) || AUDIO_EXTENSIONS.contains(&extension)
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            details: None,
        }),
    )
        .into_response()
}

fn server_error(message: &str, details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            details: Some(details),
        }),
    )
        .into_response()
}
