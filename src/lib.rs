//! # pydiolib
//!
//! Rust client adapter for the Pydio content-management REST API.
//!
//! The adapter maps filesystem-style operations onto the server's fixed
//! set of REST actions. Every call is one signed HTTP POST: the adapter
//! exchanges its credentials for a session token pair on first use, then
//! authenticates each request with a fresh nonce and an HMAC-SHA256 hash
//! over the target URI.
//!
//! ## Features
//!
//! - **Authentication**: lazy token exchange over HTTP basic auth, then
//!   per-request nonce + HMAC signing. One token pair per adapter
//!   lifetime, acquired exactly once even under concurrent first use.
//! - **File content**: `read`/`read_stream` over the `download` action,
//!   `write`/`update` over `mkfile` + `put_content`, and
//!   `write_stream`/`update_stream` as a multipart `upload`.
//! - **Tree operations**: `create_dir` (recursive, idempotent), `mv`,
//!   `rename`, `copy`, `delete`, `delete_dir`.
//! - **Metadata**: `list_contents` and `metadata` normalize the server's
//!   listing XML into [`Entry`] records; `size`, `mimetype`, `timestamp`,
//!   `permission`, `visibility`, and `has` project from them.
//! - **Visibility**: `set_visibility` maps public/private onto the
//!   server's numeric chmod values.
//!
//! Absent paths are reported as `None`/`false`, not errors. Server error
//! statuses and unparseable bodies surface as protocol errors, transport
//! failures as transport errors; see [`PydioError`].
//!
//! ## Example
//!
//! ```no_run
//! use pydiolib::{PydioAdapter, Visibility};
//!
//! # async fn example() -> pydiolib::Result<()> {
//! let adapter = PydioAdapter::new(
//!     "api-user",
//!     "api-password",
//!     "https://pydio.example.com/rest/",
//!     "my-workspace",
//! );
//!
//! // Parent directories are created on demand.
//! adapter
//!     .write("reports/2024/q1.txt", "draft", Some(Visibility::Private))
//!     .await?;
//!
//! if let Some(entry) = adapter.metadata("reports/2024/q1.txt").await? {
//!     println!("{} bytes: {:?}", entry.path, entry.size);
//! }
//!
//! for entry in adapter.list_contents("reports/2024").await? {
//!     println!("{}", entry.path);
//! }
//! # Ok(())
//! # }
//! ```

mod adapter;
pub mod api;
mod auth;
pub mod error;
pub mod fs;
pub mod http;

// Re-export commonly used types
pub use adapter::PydioAdapter;
pub use api::{Action, ApiClient};
pub use error::{PydioError, Result};
pub use fs::{Entry, EntryKind, Visibility};
