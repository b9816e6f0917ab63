mod master_log;

pub use master_log::MasterTranscriptLog;
