//! Directory creation and node mutation operations.

use crate::adapter::PydioAdapter;
use crate::api::Action;
use crate::error::Result;

use super::utils::{basename, dirname};

impl PydioAdapter {
    /// Create a directory, including missing ancestors.
    ///
    /// An already-existing directory is a no-op success. Otherwise the
    /// path is walked root-to-leaf with one `mkdir` per prefix; the first
    /// failing step aborts the walk.
    pub async fn create_dir(&self, dirname: &str) -> Result<()> {
        if self.has(dirname).await? {
            return Ok(());
        }

        let mut prefix = String::new();
        for component in dirname.split('/').filter(|c| !c.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(component);
            self.api.request(Action::Mkdir, &prefix, &[]).await?;
        }

        Ok(())
    }

    /// Delete a file.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.api
            .request(Action::Delete, path, &[("file", format!("/{}", path))])
            .await?;
        Ok(())
    }

    /// Delete a directory.
    ///
    /// The server handles directory contents itself; on the wire this is
    /// `delete` under another name.
    pub async fn delete_dir(&self, dirname: &str) -> Result<()> {
        self.delete(dirname).await
    }

    /// Move a file into another directory, renaming it on the way.
    ///
    /// The destination parent is created when absent.
    pub async fn mv(&self, path: &str, new_path: &str) -> Result<()> {
        self.ensure_parent(new_path).await?;

        let fields = [
            ("file", format!("/{}", path)),
            ("filename_new", format!("/{}", basename(new_path))),
            ("dest", format!("/{}", dirname(new_path))),
            ("dir", format!("/{}", dirname(path))),
        ];
        self.api.request(Action::Move, path, &fields).await?;
        Ok(())
    }

    /// Rename a file.
    ///
    /// The rename action addresses the node by `file` and `filename_new`
    /// alone; it carries no `dest`/`dir` fields, unlike [`PydioAdapter::mv`].
    pub async fn rename(&self, path: &str, new_path: &str) -> Result<()> {
        self.ensure_parent(new_path).await?;

        let fields = [
            ("file", format!("/{}", path)),
            ("filename_new", format!("/{}", basename(new_path))),
        ];
        self.api.request(Action::Rename, path, &fields).await?;
        Ok(())
    }

    /// Copy a file into another directory, keeping its name.
    ///
    /// The destination parent is created when absent.
    pub async fn copy(&self, path: &str, new_path: &str) -> Result<()> {
        self.ensure_parent(new_path).await?;

        let fields = [
            ("file", format!("/{}", path)),
            ("dest", format!("/{}", dirname(new_path))),
            ("dir", format!("/{}", dirname(path))),
        ];
        self.api.request(Action::Copy, path, &fields).await?;
        Ok(())
    }

    /// Create the parent directory of `path` when it is missing. The
    /// empty parent is the workspace root and always present.
    pub(crate) async fn ensure_parent(&self, path: &str) -> Result<()> {
        let parent = dirname(path);
        if !self.has(parent).await? {
            self.create_dir(parent).await?;
        }
        Ok(())
    }
}
