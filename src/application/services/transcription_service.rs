use std::path::{Path, PathBuf};
use std::sync::Arc;

use hound::SampleFormat;

use crate::application::ports::{RecognitionError, SpeechEngine};

/// Frames handed to the recognizer per feed call.
const CHUNK_FRAMES: usize = 4000;

pub struct TranscriptionService {
    engine: Arc<dyn SpeechEngine>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self { engine }
    }

    pub async fn transcribe_wav(&self, path: &Path) -> Result<String, TranscriptionError> {
        let engine = Arc::clone(&self.engine);
        let path: PathBuf = path.to_owned();

        tokio::task::spawn_blocking(move || transcribe_file(engine.as_ref(), &path))
            .await
            .map_err(|e| TranscriptionError::Worker(e.to_string()))?
    }
}

fn transcribe_file(engine: &dyn SpeechEngine, path: &Path) -> Result<String, TranscriptionError> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| TranscriptionError::UnsupportedFormat(e.to_string()))?;

    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(TranscriptionError::UnsupportedFormat(format!(
            "audio must be mono 16-bit integer PCM, got {} channel(s) at {} bits",
            spec.channels, spec.bits_per_sample
        )));
    }

    let mut session = engine.start_session(spec.sample_rate)?;
    let mut texts: Vec<String> = Vec::new();
    let mut chunk: Vec<i16> = Vec::with_capacity(CHUNK_FRAMES);
    let mut total_frames: u64 = 0;

    for sample in reader.samples::<i16>() {
        let frame = sample.map_err(|e| TranscriptionError::UnsupportedFormat(e.to_string()))?;
        chunk.push(frame);
        total_frames += 1;
        if chunk.len() == CHUNK_FRAMES {
            if let Some(text) = session.feed(&chunk)? {
                texts.push(text);
            }
            chunk.clear();
        }
    }

    if !chunk.is_empty() {
        if let Some(text) = session.feed(&chunk)? {
            texts.push(text);
        }
    }
    texts.push(session.finish()?);

    tracing::debug!(
        frames = total_frames,
        duration_secs = total_frames as f64 / spec.sample_rate as f64,
        results = texts.len(),
        "Audio fed through recognizer"
    );

    Ok(texts.join(" ").trim().to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
    #[error("transcription worker failed: {0}")]
    Worker(String),
}
