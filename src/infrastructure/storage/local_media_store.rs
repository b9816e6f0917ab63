use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::{MediaFolder, is_safe_name};

pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf) -> Result<Self, MediaStoreError> {
        for folder in MediaFolder::ALL {
            std::fs::create_dir_all(root.join(folder.dir_name())).map_err(MediaStoreError::Io)?;
        }
        Ok(Self { root })
    }
}

#[async_trait::async_trait]
impl MediaStore for LocalMediaStore {
    async fn store_new(
        &self,
        folder: MediaFolder,
        base: &str,
        ext: &str,
        data: &[u8],
    ) -> Result<String, MediaStoreError> {
        let mut attempt: u32 = 0;
        loop {
            let candidate = if attempt == 0 {
                format!("{base}.{ext}")
            } else {
                format!("{base}_{attempt}.{ext}")
            };
            if !is_safe_name(&candidate) {
                return Err(MediaStoreError::InvalidName(candidate));
            }

            // create_new makes the name claim atomic, so concurrent uploads of
            // the same base each land on their own suffix.
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.resolve(folder, &candidate))
                .await
            {
                Ok(mut file) => {
                    file.write_all(data).await?;
                    file.flush().await?;
                    return Ok(candidate);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                }
                Err(e) => return Err(MediaStoreError::Io(e)),
            }
        }
    }

    async fn put(
        &self,
        folder: MediaFolder,
        filename: &str,
        data: &[u8],
    ) -> Result<(), MediaStoreError> {
        if !is_safe_name(filename) {
            return Err(MediaStoreError::InvalidName(filename.to_string()));
        }
        fs::write(self.resolve(folder, filename), data).await?;
        Ok(())
    }

    async fn stream(
        &self,
        folder: MediaFolder,
        filename: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, MediaStoreError> {
        if !is_safe_name(filename) {
            return Err(MediaStoreError::InvalidName(filename.to_string()));
        }
        let file = fs::File::open(self.resolve(folder, filename))
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => MediaStoreError::NotFound(filename.to_string()),
                _ => MediaStoreError::Io(e),
            })?;
        Ok(ReaderStream::new(file).boxed())
    }

    async fn list(&self, folder: MediaFolder) -> Result<Vec<String>, MediaStoreError> {
        let mut entries = fs::read_dir(self.root.join(folder.dir_name())).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn resolve(&self, folder: MediaFolder, filename: &str) -> PathBuf {
        self.root.join(folder.dir_name()).join(filename)
    }
}
