#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioProfile {
    Mp3,
    SpeechWav,
}

impl AudioProfile {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioProfile::Mp3 => "mp3",
            AudioProfile::SpeechWav => "wav",
        }
    }
}
