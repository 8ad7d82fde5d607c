//! File content writes, updates, and visibility changes.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::adapter::PydioAdapter;
use crate::api::Action;
use crate::error::{PydioError, Result};
use crate::fs::entry::Visibility;

use super::utils::{basename, dirname};

impl PydioAdapter {
    /// Write a file, creating missing parent directories.
    ///
    /// Issues `mkfile` then `put_content`; the content travels as a form
    /// field. Visibility is applied afterwards when requested.
    pub async fn write(
        &self,
        path: &str,
        contents: &str,
        visibility: Option<Visibility>,
    ) -> Result<()> {
        self.ensure_parent(path).await?;

        self.api.request(Action::Mkfile, path, &[]).await?;
        self.put_content(path, contents).await?;

        if let Some(visibility) = visibility {
            self.set_visibility(path, visibility).await?;
        }
        Ok(())
    }

    /// Update an existing file.
    ///
    /// # Errors
    /// [`PydioError::NotFound`] when the path does not exist; no parent
    /// directories are created.
    pub async fn update(
        &self,
        path: &str,
        contents: &str,
        visibility: Option<Visibility>,
    ) -> Result<()> {
        if !self.has(path).await? {
            return Err(PydioError::NotFound(path.to_string()));
        }

        self.put_content(path, contents).await?;

        if let Some(visibility) = visibility {
            self.set_visibility(path, visibility).await?;
        }
        Ok(())
    }

    /// Write a file from a reader.
    ///
    /// The stream is drained fully into memory, then shipped in one
    /// multipart `upload` POST; there is no chunked streaming. Missing
    /// parent directories are created.
    pub async fn write_stream<R>(
        &self,
        path: &str,
        reader: &mut R,
        visibility: Option<Visibility>,
    ) -> Result<()>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        self.ensure_parent(path).await?;

        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).await?;

        let parent = dirname(path);
        let url_path = if parent.is_empty() {
            path.to_string()
        } else {
            format!("put/{}", parent)
        };
        let fields = [
            ("dir", parent.to_string()),
            ("file", format!("/{}", path)),
            ("xhr_uploader", "true".to_string()),
            ("auto_rename", "false".to_string()),
            ("urlencoded_filename", format!("/{}", basename(path))),
        ];
        self.api
            .request_upload(Action::Upload, &url_path, &fields, contents)
            .await?;

        if let Some(visibility) = visibility {
            self.set_visibility(path, visibility).await?;
        }
        Ok(())
    }

    /// Update a file from a reader. Same wire behavior as
    /// [`PydioAdapter::write_stream`].
    pub async fn update_stream<R>(
        &self,
        path: &str,
        reader: &mut R,
        visibility: Option<Visibility>,
    ) -> Result<()>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        self.write_stream(path, reader, visibility).await
    }

    /// Set the visibility of a node.
    ///
    /// The `chmod` action is addressed to the parent directory, with the
    /// target node and numeric mode in the fields.
    pub async fn set_visibility(&self, path: &str, visibility: Visibility) -> Result<()> {
        let fields = [
            ("file", format!("/{}", path)),
            ("chmod_value", visibility.mode().to_string()),
        ];
        self.api
            .request(Action::Chmod, dirname(path), &fields)
            .await?;
        Ok(())
    }

    async fn put_content(&self, path: &str, contents: &str) -> Result<()> {
        let fields = [
            ("file", format!("/{}", path)),
            ("content", contents.to_string()),
            ("_method", "put".to_string()),
        ];
        self.api.request(Action::PutContent, path, &fields).await?;
        Ok(())
    }
}
