pub mod observability;
pub mod speech;
pub mod storage;
pub mod transcoding;
pub mod transcript;
