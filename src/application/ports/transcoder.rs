use std::path::Path;

use async_trait::async_trait;

use crate::domain::AudioProfile;

/// External media transcoder producing an audio file from a stored input.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        profile: AudioProfile,
    ) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to launch transcoder: {0}")]
    Launch(String),
    #[error("transcoding failed: {0}")]
    ToolFailure(String),
}
