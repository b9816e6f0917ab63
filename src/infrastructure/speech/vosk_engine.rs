use std::path::PathBuf;

use vosk::{CompleteResult, DecodingState, Model, Recognizer};

use crate::application::ports::{RecognitionError, RecognitionSession, SpeechEngine};

/// Offline recognizer backed by a Vosk model directory, loaded once and shared.
pub struct VoskSpeechEngine {
    model: Model,
}

impl VoskSpeechEngine {
    pub fn load(model_dir: PathBuf) -> Result<Self, RecognitionError> {
        if !model_dir.is_dir() {
            return Err(RecognitionError::ModelNotFound(model_dir));
        }
        let model = Model::new(model_dir.to_string_lossy().into_owned())
            .ok_or_else(|| RecognitionError::ModelLoadFailed(model_dir.display().to_string()))?;
        Ok(Self { model })
    }
}

impl SpeechEngine for VoskSpeechEngine {
    fn start_session(
        &self,
        sample_rate: u32,
    ) -> Result<Box<dyn RecognitionSession>, RecognitionError> {
        let recognizer = Recognizer::new(&self.model, sample_rate as f32).ok_or_else(|| {
            RecognitionError::SessionFailed(format!(
                "recognizer rejected sample rate {sample_rate}"
            ))
        })?;
        Ok(Box::new(VoskSession { recognizer }))
    }
}

struct VoskSession {
    recognizer: Recognizer,
}

impl RecognitionSession for VoskSession {
    fn feed(&mut self, frames: &[i16]) -> Result<Option<String>, RecognitionError> {
        match self.recognizer.accept_waveform(frames) {
            Ok(DecodingState::Finalized) => Ok(Some(single_text(self.recognizer.result()))),
            Ok(DecodingState::Running) => Ok(None),
            Ok(DecodingState::Failed) => Err(RecognitionError::Failed(
                "decoder entered failed state".to_string(),
            )),
            Err(e) => Err(RecognitionError::Failed(e.to_string())),
        }
    }

    fn finish(&mut self) -> Result<String, RecognitionError> {
        Ok(single_text(self.recognizer.final_result()))
    }
}

fn single_text(result: CompleteResult<'_>) -> String {
    result
        .single()
        .map(|r| r.text.to_string())
        .unwrap_or_default()
}
