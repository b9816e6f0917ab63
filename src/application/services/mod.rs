mod extraction_service;
mod transcription_service;

pub use extraction_service::{
    ExtractionError, ExtractionOutcome, ExtractionService, TranscriptionOutcome, TranscriptionStage,
};
pub use transcription_service::{TranscriptionError, TranscriptionService};
