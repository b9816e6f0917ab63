use std::path::PathBuf;

/// Speech-to-text engine; a session is one recognition pass over one audio file.
pub trait SpeechEngine: Send + Sync {
    fn start_session(
        &self,
        sample_rate: u32,
    ) -> Result<Box<dyn RecognitionSession>, RecognitionError>;
}

pub trait RecognitionSession: Send {
    fn feed(&mut self, frames: &[i16]) -> Result<Option<String>, RecognitionError>;

    fn finish(&mut self) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("speech model not found at {}", .0.display())]
    ModelNotFound(PathBuf),
    #[error("speech model failed to load: {0}")]
    ModelLoadFailed(String),
    #[error("recognition session could not be created: {0}")]
    SessionFailed(String),
    #[error("recognition failed: {0}")]
    Failed(String),
}
