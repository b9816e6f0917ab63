use std::io;

use async_trait::async_trait;

/// Destination for finished transcriptions; implementations serialize their writes.
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    async fn append(&self, source_filename: &str, text: &str) -> Result<(), TranscriptSinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptSinkError {
    #[error("transcript append failed: {0}")]
    Io(#[from] io::Error),
}
