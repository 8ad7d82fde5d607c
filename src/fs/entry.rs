//! File metadata records and listing-XML normalization.

use crate::error::Result;

/// Entry type: regular file or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Dir,
}

/// Visibility of a node, mapped onto fixed numeric chmod values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// World/group readable
    Public,
    /// Owner only
    Private,
}

impl Visibility {
    /// Numeric mode sent as `chmod_value`.
    pub fn mode(&self) -> u32 {
        match self {
            Visibility::Public => 744,
            Visibility::Private => 700,
        }
    }

    /// Visibility label as the host contract spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Derive visibility from permission bits: public when the group or
    /// world read bits are set.
    pub fn from_mode(mode: u32) -> Self {
        if mode & 0o044 != 0 {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// Normalized metadata for one node of a listing.
///
/// Derived per request from the server's listing XML; never cached.
/// Missing attributes normalize to empty strings or zero, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory
    pub kind: EntryKind,
    /// Path as reported by the server (`filename` attribute)
    pub path: String,
    /// Modification time, seconds since the epoch (`ajxp_modiftime`)
    pub timestamp: i64,
    /// Raw permission string, usually octal like `0644` (`file_perms`)
    pub permission: String,
    /// Mime identifier (`mimestring_id`)
    pub mime_id: String,
    /// Mime label (`mimestring`)
    pub mime: String,
    /// Size in bytes; present only for files (`bytesize`)
    pub size: Option<u64>,
}

impl Entry {
    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Permission string parsed as an octal mode; 0 when absent or
    /// unparseable.
    pub fn mode(&self) -> u32 {
        u32::from_str_radix(self.permission.trim(), 8).unwrap_or(0)
    }

    /// Visibility derived from the permission bits.
    pub fn visibility(&self) -> Visibility {
        Visibility::from_mode(self.mode())
    }

    /// The workspace root, which always exists and never answers a
    /// metadata request of its own.
    pub(crate) fn root() -> Self {
        Self {
            kind: EntryKind::Dir,
            path: "/".to_string(),
            timestamp: 0,
            permission: String::new(),
            mime_id: String::new(),
            mime: String::new(),
            size: None,
        }
    }

    /// Normalize one listing node from its XML attributes.
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let attr = |name: &str| node.attribute(name).unwrap_or("").to_string();

        let kind = if node.attribute("is_file") == Some("true") {
            EntryKind::File
        } else {
            EntryKind::Dir
        };
        let size = match kind {
            EntryKind::File => Some(
                node.attribute("bytesize")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
            ),
            EntryKind::Dir => None,
        };

        Self {
            kind,
            path: attr("filename"),
            timestamp: node
                .attribute("ajxp_modiftime")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            permission: attr("file_perms"),
            mime_id: attr("mimestring_id"),
            mime: attr("mimestring"),
            size,
        }
    }
}

/// Parse a directory-listing body into one entry per child node.
///
/// The server wraps children in an outer `tree` element. A body that does
/// not parse as XML is a protocol error.
pub(crate) fn parse_listing(body: &str) -> Result<Vec<Entry>> {
    let doc = roxmltree::Document::parse(body)?;
    Ok(doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .map(Entry::from_node)
        .collect())
}

/// Parse a single-node stat body: `None` when the outer element has no
/// children, i.e. the path does not exist.
pub(crate) fn parse_single(body: &str) -> Result<Option<Entry>> {
    Ok(parse_listing(body)?.into_iter().next())
}
