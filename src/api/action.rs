//! The fixed table of remote actions.

/// A named remote operation, bound to a fixed URL path fragment.
///
/// The table is the full set the server's REST dispatcher accepts for a
/// workspace. `Purge` and `GetContent` have no adapter verb mapped onto
/// them but are part of the contract and kept addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Multipart file upload
    Upload,
    /// Create an empty file
    Mkfile,
    /// Create a directory
    Mkdir,
    /// Purge expired shared elements
    Purge,
    /// List a directory or stat a single node
    Ls,
    /// Download raw file content
    Download,
    /// Fetch file content inline
    GetContent,
    /// Replace file content
    PutContent,
    /// Rename a node in place
    Rename,
    /// Copy a node to another directory
    Copy,
    /// Move a node to another directory
    Move,
    /// Delete a node
    Delete,
    /// Change node permissions
    Chmod,
}

impl Action {
    /// URL path fragment for this action, with surrounding slashes so the
    /// target path can be appended directly.
    pub fn path(&self) -> &'static str {
        match self {
            Action::Upload => "/upload/",
            Action::Mkfile => "/mkfile/",
            Action::Mkdir => "/mkdir/",
            Action::Purge => "/purge/",
            Action::Ls => "/ls/",
            Action::Download => "/download/",
            Action::GetContent => "/get_content/",
            Action::PutContent => "/put_content/put/",
            Action::Rename => "/rename/",
            Action::Copy => "/copy/",
            Action::Move => "/move/",
            Action::Delete => "/delete/",
            Action::Chmod => "/chmod/",
        }
    }

    /// Action name as the server spells it, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Upload => "upload",
            Action::Mkfile => "mkfile",
            Action::Mkdir => "mkdir",
            Action::Purge => "purge",
            Action::Ls => "ls",
            Action::Download => "download",
            Action::GetContent => "get_content",
            Action::PutContent => "put_content",
            Action::Rename => "rename",
            Action::Copy => "copy",
            Action::Move => "move",
            Action::Delete => "delete",
            Action::Chmod => "chmod",
        }
    }
}
