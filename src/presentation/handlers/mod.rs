mod download;
mod extract_audio;
mod health;
mod list_files;

pub use download::{
    download_audio_handler, download_master_transcript_handler, download_transcription_handler,
    download_video_handler,
};
pub use extract_audio::extract_audio_handler;
pub use health::health_handler;
pub use list_files::list_files_handler;
