use std::path::PathBuf;

use async_trait::async_trait;

use crate::server::service::import::store::TranscriptStore;

/// Stores transcript archives under `<root>/transcripts/<guild id>.zip`.
pub struct FsTranscriptStore {
    root: PathBuf,
}

impl FsTranscriptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn archive_path(&self, guild_id: u64) -> PathBuf {
        self.root
            .join("transcripts")
            .join(format!("{}.zip", guild_id))
    }
}

#[async_trait]
impl TranscriptStore for FsTranscriptStore {
    /// Replaces the guild's archive; the previous one stays intact if the write fails.
    async fn put_transcripts(&self, guild_id: u64, archive: Vec<u8>) -> std::io::Result<()> {
        let path = self.archive_path(guild_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let partial = path.with_extension("zip.partial");
        tokio::fs::write(&partial, archive).await?;
        tokio::fs::rename(&partial, &path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_archive_under_guild_path() {
        let root = std::env::temp_dir()
            .join(format!("ticketboard-transcripts-{}", std::process::id()));
        let store = FsTranscriptStore::new(&root);

        store.put_transcripts(42, b"first".to_vec()).await.unwrap();
        store.put_transcripts(42, b"second".to_vec()).await.unwrap();

        let stored = tokio::fs::read(root.join("transcripts").join("42.zip")).await.unwrap();
        assert_eq!(stored, b"second");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
