mod vosk_engine;

pub use vosk_engine::VoskSpeechEngine;
