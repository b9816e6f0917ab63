use chrono::{DateTime, Utc};

/// Name of the aggregated transcript file inside the transcriptions folder.
pub const MASTER_TRANSCRIPT_FILENAME: &str = "master_transcript.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            timestamp: Utc::now(),
            text: text.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "\n\n[{}] {}\n{}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.source,
            self.text
        )
    }
}
