mod audio_profile;
mod file_name;
mod media_folder;
mod transcript_entry;

pub use audio_profile::AudioProfile;
pub use file_name::{file_stem, is_safe_name, sanitize_stem, split_extension};
pub use media_folder::MediaFolder;
pub use transcript_entry::{MASTER_TRANSCRIPT_FILENAME, TranscriptEntry};
