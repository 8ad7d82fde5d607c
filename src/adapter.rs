//! The filesystem adapter over the Pydio REST API.

use crate::api::ApiClient;

/// Filesystem-style adapter bound to one Pydio workspace.
///
/// Construction takes the four connection values; the session token pair
/// is acquired lazily on the first operation and cached for the adapter's
/// lifetime. All operations take `&self`, so one adapter can be shared
/// across tasks.
///
/// # Example
/// ```no_run
/// use pydiolib::PydioAdapter;
///
/// # async fn example() -> pydiolib::Result<()> {
/// let adapter = PydioAdapter::new(
///     "api-user",
///     "api-password",
///     "https://pydio.example.com/rest/",
///     "my-workspace",
/// );
///
/// adapter.write("notes/todo.txt", "ship it", None).await?;
/// let bytes = adapter.read("notes/todo.txt").await?;
/// assert_eq!(bytes, b"ship it");
///
/// for entry in adapter.list_contents("notes").await? {
///     println!("{} ({:?})", entry.path, entry.kind);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PydioAdapter {
    pub(crate) api: ApiClient,
}

impl PydioAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `user` - REST API username
    /// * `password` - REST API password
    /// * `base_url` - API base URL, e.g. `https://host/rest/`
    /// * `workspace` - workspace id under which all paths resolve
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            api: ApiClient::new(user, password, base_url, workspace),
        }
    }

    /// The underlying API client, for raw action dispatch.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
