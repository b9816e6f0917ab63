use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::PipelineMode;
use crate::presentation::handlers::{
    download_audio_handler, download_master_transcript_handler, download_transcription_handler,
    download_video_handler, extract_audio_handler, health_handler, list_files_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/api/extract-audio", post(extract_audio_handler))
        .route("/api/download/{filename}", get(download_audio_handler))
        .route("/api/videos/{filename}", get(download_video_handler));

    router = match state.mode {
        PipelineMode::Extract => router.route("/api/list-files", get(list_files_handler)),
        PipelineMode::Transcribe => router
            .route(
                "/api/download-transcription/{filename}",
                get(download_transcription_handler),
            )
            .route(
                "/api/download-master-transcript",
                get(download_master_transcript_handler),
            ),
    };

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}
