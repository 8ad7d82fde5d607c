//! Pydio API client with signed request dispatch.

use reqwest::multipart::{Form, Part};
use tokio::sync::OnceCell;

use crate::auth::{self, AuthKeys};
use crate::error::Result;
use crate::http::HttpClient;

use super::action::Action;

/// Part name the upload endpoint reads the file content from.
const UPLOAD_PART: &str = "userfile_0";

/// Synthetic filename attached to the upload part; the real target name
/// travels in the `urlencoded_filename` field.
const UPLOAD_FILENAME: &str = "fake-name";

/// Low-level Pydio API client.
///
/// Owns the connection credentials, the lazily acquired session token
/// pair, and the URL construction and signing for every request. All
/// higher-level filesystem verbs funnel through [`ApiClient::request`] or
/// [`ApiClient::request_upload`].
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    user: String,
    password: String,
    base_url: String,
    workspace: String,
    keys: OnceCell<AuthKeys>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    /// * `user` - REST API username
    /// * `password` - REST API password
    /// * `base_url` - API base URL, e.g. `https://host/rest/`
    /// * `workspace` - target workspace id under which all paths resolve
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            http: HttpClient::new(),
            user: user.into(),
            password: password.into(),
            base_url,
            workspace: workspace.into(),
            keys: OnceCell::new(),
        }
    }

    /// The session token pair, exchanging credentials on first use.
    ///
    /// `OnceCell` guarantees a single exchange even when the first
    /// operations race from concurrent tasks.
    async fn keys(&self) -> Result<&AuthKeys> {
        self.keys
            .get_or_try_init(|| {
                auth::exchange_token(&self.http, &self.base_url, &self.user, &self.password)
            })
            .await
    }

    /// The two per-request auth fields for a signed call to `action_uri`.
    async fn auth_fields(&self, action_uri: &str) -> Result<[(String, String); 2]> {
        let keys = self.keys().await?;
        Ok([
            (
                "auth_hash".to_string(),
                auth::sign(keys, &self.workspace, action_uri),
            ),
            ("auth_token".to_string(), keys.token.clone()),
        ])
    }

    /// The fixed field set every request starts from.
    async fn base_fields(&self, action_uri: &str) -> Result<Vec<(String, String)>> {
        let [auth_hash, auth_token] = self.auth_fields(action_uri).await?;
        Ok(vec![
            ("force_post".to_string(), "true".to_string()),
            auth_hash,
            auth_token,
            ("auto_rename".to_string(), "false".to_string()),
        ])
    }

    /// Perform one signed form-encoded POST and return the raw body.
    ///
    /// The URL is `<base>/<workspace><action fragment><path>`; `fields`
    /// are appended to the fixed set, with a same-named caller field
    /// replacing the fixed one.
    pub async fn request(
        &self,
        action: Action,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<Vec<u8>> {
        let action_uri = format!("{}{}", action.path(), path);
        let url = format!("{}{}{}", self.base_url, self.workspace, action_uri);

        let form = merge_fields(self.base_fields(&action_uri).await?, fields);

        tracing::debug!(action = action.name(), path, "dispatching request");
        self.http.post_form(&url, &form).await
    }

    /// Perform one signed multipart POST carrying `content` as the upload
    /// part, and return the raw body.
    pub async fn request_upload(
        &self,
        action: Action,
        path: &str,
        fields: &[(&str, String)],
        content: Vec<u8>,
    ) -> Result<Vec<u8>> {
        let action_uri = format!("{}{}", action.path(), path);
        let url = format!("{}{}{}", self.base_url, self.workspace, action_uri);

        let mut form = Form::new();
        for (name, value) in merge_fields(self.base_fields(&action_uri).await?, fields) {
            form = form.text(name, value);
        }
        form = form.part(
            UPLOAD_PART,
            Part::bytes(content).file_name(UPLOAD_FILENAME),
        );

        tracing::debug!(action = action.name(), path, "dispatching upload");
        self.http.post_multipart(&url, form).await
    }
}

/// Append caller fields to the fixed set; a caller field that shares a
/// name with a fixed one replaces it in place.
fn merge_fields(fixed: Vec<(String, String)>, caller: &[(&str, String)]) -> Vec<(String, String)> {
    let mut merged = fixed;
    for (name, value) in caller {
        if let Some(slot) = merged.iter_mut().find(|(n, _)| n.as_str() == *name) {
            slot.1 = value.clone();
        } else {
            merged.push((name.to_string(), value.clone()));
        }
    }
    merged
}
