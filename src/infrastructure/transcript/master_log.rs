use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{TranscriptSink, TranscriptSinkError};
use crate::domain::TranscriptEntry;

/// Append-only master transcript log; a mutex serializes concurrent appends.
pub struct MasterTranscriptLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl MasterTranscriptLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSink for MasterTranscriptLog {
    async fn append(&self, source_filename: &str, text: &str) -> Result<(), TranscriptSinkError> {
        let _guard = self.write_lock.lock().await;
        // Stamped under the lock so file order matches timestamp order.
        let entry = TranscriptEntry::new(source_filename, text);
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.render().as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
