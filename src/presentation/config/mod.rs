mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PipelineMode, PipelineSettings, ServerSettings, Settings, SpeechSettings,
    StorageSettings, TranscodingSettings,
};
