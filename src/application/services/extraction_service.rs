use std::sync::Arc;

use crate::application::ports::{
    MediaStore, MediaStoreError, TranscodeError, Transcoder, TranscriptSink, TranscriptSinkError,
};
use crate::domain::{AudioProfile, MASTER_TRANSCRIPT_FILENAME, MediaFolder, file_stem};

use super::transcription_service::{TranscriptionError, TranscriptionService};

pub struct TranscriptionStage {
    service: TranscriptionService,
    sink: Arc<dyn TranscriptSink>,
}

impl TranscriptionStage {
    pub fn new(service: TranscriptionService, sink: Arc<dyn TranscriptSink>) -> Self {
        Self { service, sink }
    }
}

#[derive(Debug)]
pub struct ExtractionOutcome {
    pub video_filename: String,
    pub audio_filename: String,
    pub transcription: Option<TranscriptionOutcome>,
}

#[derive(Debug)]
pub struct TranscriptionOutcome {
    pub filename: String,
    pub text: String,
}

pub struct ExtractionService {
    store: Arc<dyn MediaStore>,
    transcoder: Arc<dyn Transcoder>,
    profile: AudioProfile,
    transcription: Option<TranscriptionStage>,
}

impl ExtractionService {
    pub fn new(
        store: Arc<dyn MediaStore>,
        transcoder: Arc<dyn Transcoder>,
        profile: AudioProfile,
        transcription: Option<TranscriptionStage>,
    ) -> Self {
        Self {
            store,
            transcoder,
            profile,
            transcription,
        }
    }

    /// Run the upload pipeline: store the video, extract audio, optionally transcribe.
    pub async fn process_upload(
        &self,
        base: &str,
        ext: &str,
        data: &[u8],
    ) -> Result<ExtractionOutcome, ExtractionError> {
        let mut base = base.to_string();
        // A transcript stored under the master log's own stem would truncate the log.
        if self.transcription.is_some() && base == file_stem(MASTER_TRANSCRIPT_FILENAME) {
            base.push_str("_1");
        }
        let video_filename = self
            .store
            .store_new(MediaFolder::Videos, &base, ext, data)
            .await?;
        let stem = file_stem(&video_filename).to_string();
        let audio_filename = format!("{}.{}", stem, self.profile.extension());

        let input = self.store.resolve(MediaFolder::Videos, &video_filename);
        let output = self.store.resolve(MediaFolder::Audio, &audio_filename);
        self.transcoder
            .transcode(&input, &output, self.profile)
            .await?;

        tracing::info!(video = %video_filename, audio = %audio_filename, "Audio track extracted");

        let transcription = match &self.transcription {
            None => None,
            Some(stage) => {
                let text = stage.service.transcribe_wav(&output).await?;
                let transcript_filename = format!("{}.txt", stem);
                self.store
                    .put(
                        MediaFolder::Transcriptions,
                        &transcript_filename,
                        text.as_bytes(),
                    )
                    .await?;
                stage.sink.append(&video_filename, &text).await?;

                tracing::info!(
                    transcript = %transcript_filename,
                    chars = text.len(),
                    "Transcription recorded"
                );

                Some(TranscriptionOutcome {
                    filename: transcript_filename,
                    text,
                })
            }
        };

        Ok(ExtractionOutcome {
            video_filename,
            audio_filename,
            transcription,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("storage: {0}")]
    Store(#[from] MediaStoreError),
    #[error("transcoding: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("transcript log: {0}")]
    TranscriptLog(#[from] TranscriptSinkError),
}
