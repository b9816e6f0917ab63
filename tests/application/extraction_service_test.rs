use std::path::Path;
use std::sync::{Arc, Mutex};

use clipscribe::application::ports::{
    MediaStore, RecognitionError, RecognitionSession, SpeechEngine, TranscodeError, Transcoder,
    TranscriptSink, TranscriptSinkError,
};
use clipscribe::application::services::{
    ExtractionError, ExtractionService, TranscriptionService, TranscriptionStage,
};
use clipscribe::domain::{AudioProfile, MASTER_TRANSCRIPT_FILENAME};
use clipscribe::infrastructure::storage::LocalMediaStore;
use clipscribe::infrastructure::transcript::MasterTranscriptLog;

/// Writes a plausible output file instead of shelling out to ffmpeg.
struct MockTranscoder;

#[async_trait::async_trait]
impl Transcoder for MockTranscoder {
    async fn transcode(
        &self,
        _input: &Path,
        output: &Path,
        profile: AudioProfile,
    ) -> Result<(), TranscodeError> {
        let payload = match profile {
            AudioProfile::Mp3 => b"mock-mp3-payload".to_vec(),
            AudioProfile::SpeechWav => {
                let spec = hound::WavSpec {
                    channels: 1,
                    sample_rate: 16_000,
                    bits_per_sample: 16,
                    sample_format: hound::SampleFormat::Int,
                };
                let mut cursor = std::io::Cursor::new(Vec::new());
                let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
                for _ in 0..4_000 {
                    writer.write_sample(0i16).unwrap();
                }
                writer.finalize().unwrap();
                cursor.into_inner()
            }
        };
        tokio::fs::write(output, payload)
            .await
            .map_err(|e| TranscodeError::ToolFailure(e.to_string()))?;
        Ok(())
    }
}

struct FailingTranscoder;

#[async_trait::async_trait]
impl Transcoder for FailingTranscoder {
    async fn transcode(
        &self,
        _input: &Path,
        _output: &Path,
        _profile: AudioProfile,
    ) -> Result<(), TranscodeError> {
        Err(TranscodeError::ToolFailure("mock: no audio track".to_string()))
    }
}

struct FixedTextEngine {
    text: String,
}

impl SpeechEngine for FixedTextEngine {
    fn start_session(
        &self,
        _sample_rate: u32,
    ) -> Result<Box<dyn RecognitionSession>, RecognitionError> {
        Ok(Box::new(FixedTextSession {
            text: self.text.clone(),
        }))
    }
}

struct FixedTextSession {
    text: String,
}

impl RecognitionSession for FixedTextSession {
    fn feed(&mut self, _frames: &[i16]) -> Result<Option<String>, RecognitionError> {
        Ok(None)
    }

    fn finish(&mut self) -> Result<String, RecognitionError> {
        Ok(self.text.clone())
    }
}

#[derive(Default)]
struct RecordingSink {
    appended: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl TranscriptSink for RecordingSink {
    async fn append(&self, source_filename: &str, text: &str) -> Result<(), TranscriptSinkError> {
        self.appended
            .lock()
            .unwrap()
            .push((source_filename.to_string(), text.to_string()));
        Ok(())
    }
}

fn extract_service(dir: &tempfile::TempDir) -> ExtractionService {
    let store = Arc::new(LocalMediaStore::new(dir.path().to_path_buf()).unwrap());
    ExtractionService::new(store, Arc::new(MockTranscoder), AudioProfile::Mp3, None)
}

fn transcribe_service(
    dir: &tempfile::TempDir,
    transcoder: Arc<dyn Transcoder>,
    text: &str,
) -> (ExtractionService, Arc<RecordingSink>) {
    let store = Arc::new(LocalMediaStore::new(dir.path().to_path_buf()).unwrap());
    let sink = Arc::new(RecordingSink::default());
    let engine = Arc::new(FixedTextEngine {
        text: text.to_string(),
    });
    let stage = TranscriptionStage::new(
        TranscriptionService::new(engine),
        Arc::clone(&sink) as Arc<dyn TranscriptSink>,
    );
    let service = ExtractionService::new(
        store as Arc<dyn MediaStore>,
        transcoder,
        AudioProfile::SpeechWav,
        Some(stage),
    );
    (service, sink)
}

fn master_logged_service(dir: &tempfile::TempDir, text: &str) -> ExtractionService {
    let store = Arc::new(LocalMediaStore::new(dir.path().to_path_buf()).unwrap());
    let log = Arc::new(MasterTranscriptLog::new(
        dir.path()
            .join("transcriptions")
            .join(MASTER_TRANSCRIPT_FILENAME),
    ));
    let engine = Arc::new(FixedTextEngine {
        text: text.to_string(),
    });
    let stage = TranscriptionStage::new(TranscriptionService::new(engine), log);
    ExtractionService::new(
        store,
        Arc::new(MockTranscoder),
        AudioProfile::SpeechWav,
        Some(stage),
    )
}

#[tokio::test]
async fn given_extract_profile_when_processing_then_names_follow_base() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = extract_service(&dir);

    let outcome = service
        .process_upload("talk", "mp4", b"video-bytes")
        .await
        .unwrap();

    assert_eq!(outcome.video_filename, "talk.mp4");
    assert_eq!(outcome.audio_filename, "talk.mp3");
    assert!(outcome.transcription.is_none());

    let video = std::fs::read(dir.path().join("videos").join("talk.mp4")).unwrap();
    assert_eq!(video, b"video-bytes");
    let audio = std::fs::read(dir.path().join("audio").join("talk.mp3")).unwrap();
    assert_eq!(audio, b"mock-mp3-payload");
}

#[tokio::test]
async fn given_same_base_twice_when_processing_then_suffix_flows_to_audio_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = extract_service(&dir);

    let first = service.process_upload("talk", "mp4", b"one").await.unwrap();
    let second = service.process_upload("talk", "mp4", b"two").await.unwrap();

    assert_eq!(first.video_filename, "talk.mp4");
    assert_eq!(second.video_filename, "talk_1.mp4");
    assert_eq!(second.audio_filename, "talk_1.mp3");
    assert!(dir.path().join("audio").join("talk_1.mp3").exists());
}

#[tokio::test]
async fn given_transcription_stage_when_processing_then_transcript_and_sink_get_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let (service, sink) = transcribe_service(&dir, Arc::new(MockTranscoder), "fixed words");

    let outcome = service
        .process_upload("meeting", "mp4", b"video-bytes")
        .await
        .unwrap();

    let transcription = outcome.transcription.unwrap();
    assert_eq!(transcription.filename, "meeting.txt");
    assert_eq!(transcription.text, "fixed words");
    assert_eq!(outcome.audio_filename, "meeting.wav");

    let on_disk =
        std::fs::read_to_string(dir.path().join("transcriptions").join("meeting.txt")).unwrap();
    assert_eq!(on_disk, "fixed words");

    let appended = sink.appended.lock().unwrap();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].0, "meeting.mp4");
    assert_eq!(appended[0].1, "fixed words");
}

#[tokio::test]
async fn given_failing_transcoder_when_processing_then_transcode_error_and_no_transcript() {
    let dir = tempfile::TempDir::new().unwrap();
    let (service, sink) = transcribe_service(&dir, Arc::new(FailingTranscoder), "unused");

    let err = service
        .process_upload("broken", "mp4", b"video-bytes")
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::Transcode(_)));
    assert!(dir.path().join("videos").join("broken.mp4").exists());
    assert!(!dir.path().join("audio").join("broken.wav").exists());
    assert!(!dir.path().join("transcriptions").join("broken.txt").exists());
    assert!(sink.appended.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_master_transcript_base_when_processing_then_master_log_is_preserved() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = master_logged_service(&dir, "words");

    service.process_upload("talk", "mp4", b"one").await.unwrap();
    let outcome = service
        .process_upload("master_transcript", "mp4", b"two")
        .await
        .unwrap();

    assert_eq!(outcome.video_filename, "master_transcript_1.mp4");
    assert_eq!(outcome.transcription.unwrap().filename, "master_transcript_1.txt");

    let transcriptions = dir.path().join("transcriptions");
    assert!(transcriptions.join("master_transcript_1.txt").exists());
    let master = std::fs::read_to_string(transcriptions.join(MASTER_TRANSCRIPT_FILENAME)).unwrap();
    assert!(master.contains("] talk.mp4\n"));
    assert!(master.contains("] master_transcript_1.mp4\n"));
    assert_eq!(master.matches("\n\n[").count(), 2);
}
