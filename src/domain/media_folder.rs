use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFolder {
    Videos,
    Audio,
    Transcriptions,
}

impl MediaFolder {
    pub const ALL: [MediaFolder; 3] = [
        MediaFolder::Videos,
        MediaFolder::Audio,
        MediaFolder::Transcriptions,
    ];

    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaFolder::Videos => "videos",
            MediaFolder::Audio => "audio",
            MediaFolder::Transcriptions => "transcriptions",
        }
    }
}

impl fmt::Display for MediaFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
