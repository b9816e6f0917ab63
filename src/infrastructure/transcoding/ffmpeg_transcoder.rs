use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::AudioProfile;

pub struct FfmpegTranscoder {
    binary: String,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run `<binary> -version` to confirm the tool is actually runnable.
    pub async fn check_binary(&self) -> Result<(), TranscodeError> {
        let output = Command::new(&self.binary)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| TranscodeError::Launch(format!("{}: {}", self.binary, e)))?;

        if !output.status.success() {
            return Err(TranscodeError::Launch(format!(
                "{} exited with {}",
                self.binary, output.status
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        profile: AudioProfile,
    ) -> Result<(), TranscodeError> {
        let mut command = Command::new(&self.binary);
        command
            .args(["-hide_banner", "-nostdin", "-y", "-i"])
            .arg(input)
            .arg("-vn");

        match profile {
            AudioProfile::Mp3 => {
                command.args(["-acodec", "libmp3lame", "-b:a", "192k"]);
            }
            AudioProfile::SpeechWav => {
                command.args(["-acodec", "pcm_s16le", "-ac", "1", "-ar", "16000"]);
            }
        }

        let result = command
            .arg(output)
            .output()
            .await
            .map_err(|e| TranscodeError::Launch(format!("{}: {}", self.binary, e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(TranscodeError::ToolFailure(stderr.trim().to_string()));
        }

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            profile = ?profile,
            "ffmpeg finished"
        );
        Ok(())
    }
}
