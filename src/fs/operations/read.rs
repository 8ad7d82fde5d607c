//! File content reads.

use std::io::Cursor;

use crate::adapter::PydioAdapter;
use crate::api::Action;
use crate::error::Result;

impl PydioAdapter {
    /// Read a file, returning its raw bytes.
    pub async fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.api.request(Action::Download, path, &[]).await
    }

    /// Read a file as an in-memory reader over its bytes.
    ///
    /// The whole body is downloaded first; the reader is a plain byte
    /// buffer, not a streaming download.
    pub async fn read_stream(&self, path: &str) -> Result<Cursor<Vec<u8>>> {
        Ok(Cursor::new(self.read(path).await?))
    }
}
