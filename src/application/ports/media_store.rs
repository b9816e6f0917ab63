use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::MediaFolder;

/// Media file storage: one directory per [`MediaFolder`], files addressed by bare filename.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store_new(
        &self,
        folder: MediaFolder,
        base: &str,
        ext: &str,
        data: &[u8],
    ) -> Result<String, MediaStoreError>;

    async fn put(
        &self,
        folder: MediaFolder,
        filename: &str,
        data: &[u8],
    ) -> Result<(), MediaStoreError>;

    async fn stream(
        &self,
        folder: MediaFolder,
        filename: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, MediaStoreError>;

    async fn list(&self, folder: MediaFolder) -> Result<Vec<String>, MediaStoreError>;

    fn resolve(&self, folder: MediaFolder, filename: &str) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("invalid filename: {0}")]
    InvalidName(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
