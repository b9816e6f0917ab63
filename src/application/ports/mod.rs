mod media_store;
mod speech_engine;
mod transcoder;
mod transcript_sink;

pub use media_store::{MediaStore, MediaStoreError};
pub use speech_engine::{RecognitionError, RecognitionSession, SpeechEngine};
pub use transcoder::{TranscodeError, Transcoder};
pub use transcript_sink::{TranscriptSink, TranscriptSinkError};
