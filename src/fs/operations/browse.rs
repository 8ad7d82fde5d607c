//! Listing and metadata lookups.

use crate::adapter::PydioAdapter;
use crate::api::Action;
use crate::error::Result;
use crate::fs::entry::{self, Entry, Visibility};

impl PydioAdapter {
    /// List the contents of a directory.
    ///
    /// # Arguments
    /// * `directory` - workspace-relative directory path, empty for root
    ///
    /// # Returns
    /// One [`Entry`] per child node in the server's listing.
    pub async fn list_contents(&self, directory: &str) -> Result<Vec<Entry>> {
        let body = self
            .api
            .request(
                Action::Ls,
                directory,
                &[("dir", format!("/{}", directory))],
            )
            .await?;

        entry::parse_listing(&String::from_utf8_lossy(&body))
    }

    /// Get the metadata of a file or directory.
    ///
    /// # Returns
    /// `None` when the path does not exist. The empty path is the
    /// workspace root, which always exists.
    pub async fn metadata(&self, path: &str) -> Result<Option<Entry>> {
        if path.is_empty() {
            return Ok(Some(Entry::root()));
        }

        let body = self
            .api
            .request(Action::Ls, path, &[("file", format!("/{}", path))])
            .await?;

        entry::parse_single(&String::from_utf8_lossy(&body))
    }

    /// Check whether a file or directory is present.
    pub async fn has(&self, path: &str) -> Result<bool> {
        Ok(self.metadata(path).await?.is_some())
    }

    /// Get the size of a file in bytes; `None` for absent paths and
    /// directories.
    pub async fn size(&self, path: &str) -> Result<Option<u64>> {
        Ok(self.metadata(path).await?.and_then(|e| e.size))
    }

    /// Get the mime label of a file; `None` for absent paths.
    pub async fn mimetype(&self, path: &str) -> Result<Option<String>> {
        Ok(self.metadata(path).await?.map(|e| e.mime))
    }

    /// Get the modification timestamp; `None` for absent paths.
    pub async fn timestamp(&self, path: &str) -> Result<Option<i64>> {
        Ok(self.metadata(path).await?.map(|e| e.timestamp))
    }

    /// Get the raw permission string; `None` for absent paths.
    pub async fn permission(&self, path: &str) -> Result<Option<String>> {
        Ok(self.metadata(path).await?.map(|e| e.permission))
    }

    /// Get the visibility derived from the permission bits; `None` for
    /// absent paths.
    pub async fn visibility(&self, path: &str) -> Result<Option<Visibility>> {
        Ok(self.metadata(path).await?.map(|e| e.visibility()))
    }
}
