//! HTTP client wrapper for Pydio API requests.

use reqwest::multipart::Form;
use reqwest::Client;

use crate::error::{PydioError, Result};

/// HTTP client for talking to a Pydio server.
///
/// Thin wrapper over [`reqwest::Client`]: every helper returns the raw
/// response body and translates an error status (>= 400) into
/// [`PydioError::Status`] carrying that body.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Make a GET request authenticated with HTTP basic auth.
    ///
    /// Used only for the token-exchange endpoint.
    pub async fn get_basic_auth(&self, url: &str, user: &str, password: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .basic_auth(user, Some(password))
            .send()
            .await?;

        Self::collect_body(response).await
    }

    /// Make a POST request with form-encoded fields.
    ///
    /// # Arguments
    /// * `url` - URL to post to
    /// * `fields` - form field name/value pairs
    ///
    /// # Returns
    /// Raw response body bytes
    pub async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self.client.post(url).form(fields).send().await?;

        Self::collect_body(response).await
    }

    /// Make a POST request with a multipart body.
    ///
    /// Used for the upload action, which expects the file content as a
    /// named part rather than a plain form field.
    pub async fn post_multipart(&self, url: &str, form: Form) -> Result<Vec<u8>> {
        let response = self.client.post(url).multipart(form).send().await?;

        Self::collect_body(response).await
    }

    async fn collect_body(response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "server answered with error status");
            return Err(PydioError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
