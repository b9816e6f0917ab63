use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub pipeline: PipelineSettings,
    pub transcoding: TranscodingSettings,
    #[serde(default)]
    pub speech: Option<SpeechSettings>,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered load: `appsettings.{environment}` file, then `APP`-prefixed env vars.
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub root: PathBuf,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub mode: PipelineMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    Extract,
    Transcribe,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscodingSettings {
    pub ffmpeg_binary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub model_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
