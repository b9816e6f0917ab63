use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use clipscribe::application::ports::MediaStore;
use clipscribe::application::services::{
    ExtractionService, TranscriptionService, TranscriptionStage,
};
use clipscribe::domain::{AudioProfile, MASTER_TRANSCRIPT_FILENAME, MediaFolder};
use clipscribe::infrastructure::observability::{TracingConfig, init_tracing};
use clipscribe::infrastructure::speech::VoskSpeechEngine;
use clipscribe::infrastructure::storage::LocalMediaStore;
use clipscribe::infrastructure::transcoding::FfmpegTranscoder;
use clipscribe::infrastructure::transcript::MasterTranscriptLog;
use clipscribe::presentation::{AppState, Environment, PipelineMode, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        default_filter: settings.logging.level.clone(),
        json_format: settings.logging.enable_json,
    });

    let media_store = Arc::new(LocalMediaStore::new(settings.storage.root.clone())?);

    let transcoder = Arc::new(FfmpegTranscoder::new(
        settings.transcoding.ffmpeg_binary.clone(),
    ));
    if let Err(e) = transcoder.check_binary().await {
        tracing::warn!(error = %e, "ffmpeg check failed, uploads will fail until it is installed");
    }

    let mode = settings.pipeline.mode;
    let (profile, transcription) = match mode {
        PipelineMode::Extract => (AudioProfile::Mp3, None),
        PipelineMode::Transcribe => {
            let speech = settings
                .speech
                .as_ref()
                .context("Transcribe mode requires a [speech] settings section")?;
            let engine = Arc::new(VoskSpeechEngine::load(speech.model_path.clone())?);
            let master_log = Arc::new(MasterTranscriptLog::new(
                media_store.resolve(MediaFolder::Transcriptions, MASTER_TRANSCRIPT_FILENAME),
            ));
            let stage = TranscriptionStage::new(TranscriptionService::new(engine), master_log);
            (AudioProfile::SpeechWav, Some(stage))
        }
    };

    let extraction_service = Arc::new(ExtractionService::new(
        Arc::clone(&media_store) as Arc<dyn MediaStore>,
        transcoder,
        profile,
        transcription,
    ));

    let state = AppState {
        extraction_service,
        media_store,
        mode,
        max_upload_bytes: settings.storage.max_upload_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(%addr, mode = ?mode, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
