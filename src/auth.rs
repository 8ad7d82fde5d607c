//! Token exchange and per-request signing.
//!
//! Authentication is two-layered: the adapter's credentials are exchanged
//! once for a session token pair over HTTP basic auth, then every API call
//! carries an `auth_hash` header value derived from a fresh nonce and an
//! HMAC-SHA256 over the target URI.

use hmac::{Hmac, Mac};
use rand::Rng;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::http::HttpClient;

type HmacSha256 = Hmac<Sha256>;

/// Token-generation endpoint, relative to the API base URL.
const TOKEN_ENDPOINT: &str = "pydio/keystore_generate_auth_token";

/// Device id appended to the token endpoint. The Pydio python client sends
/// a per-device identifier here; the keystore accepts an empty one.
const DEVICE_ID: &str = "";

/// Session token pair returned by the keystore.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthKeys {
    /// Public token, used as the HMAC key and sent along as `auth_token`.
    #[serde(rename = "t")]
    pub token: String,
    /// Private key, folded into every signed message.
    #[serde(rename = "p")]
    pub private: String,
}

/// Exchange the configured credentials for a session token pair.
///
/// One basic-auth GET against the keystore endpoint. The pair lives for
/// the lifetime of the adapter; there is no refresh or invalidation.
pub(crate) async fn exchange_token(
    http: &HttpClient,
    base_url: &str,
    user: &str,
    password: &str,
) -> Result<AuthKeys> {
    let url = format!("{}{}/{}", base_url, TOKEN_ENDPOINT, DEVICE_ID);
    let body = http.get_basic_auth(&url, user, password).await?;
    let keys: AuthKeys = serde_json::from_slice(&body)?;
    tracing::debug!("acquired session token pair");
    Ok(keys)
}

/// Build the `auth_hash` value for one request against `action_uri`.
///
/// The signed message is `/api/<workspace><action_uri>:<nonce>:<private>`,
/// keyed by the session token. Every call draws a fresh nonce, so the
/// header never repeats even though the token pair is cached.
pub(crate) fn sign(keys: &AuthKeys, workspace: &str, action_uri: &str) -> String {
    let nonce = make_nonce();
    let message = format!(
        "/api/{}{}:{}:{}",
        workspace, action_uri, nonce, keys.private
    );

    let mut mac = HmacSha256::new_from_slice(keys.token.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let hash = hex::encode(mac.finalize().into_bytes());

    format!("{}:{}", nonce, hash)
}

/// Generate a request nonce: the hex digest of a uniform random fraction.
fn make_nonce() -> String {
    let fraction: f64 = rand::thread_rng().gen();
    let digest = Sha256::digest(fraction.to_string().as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> AuthKeys {
        AuthKeys {
            token: "token-abc".to_string(),
            private: "private-xyz".to_string(),
        }
    }

    #[test]
    fn test_nonces_are_unique() {
        let a = make_nonce();
        let b = make_nonce();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_shape() {
        let keys = test_keys();
        let hash = sign(&keys, "ws0", "/ls/some/path");

        let (nonce, digest) = hash.split_once(':').expect("nonce:digest shape");
        assert_eq!(nonce.len(), 64);
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_sign_matches_recomputed_hmac() {
        let keys = test_keys();
        let hash = sign(&keys, "ws0", "/mkdir/a/b");
        let (nonce, digest) = hash.split_once(':').unwrap();

        let message = format!("/api/ws0/mkdir/a/b:{}:{}", nonce, keys.private);
        let mut mac = HmacSha256::new_from_slice(keys.token.as_bytes()).unwrap();
        mac.update(message.as_bytes());
        assert_eq!(digest, hex::encode(mac.finalize().into_bytes()));
    }

    #[test]
    fn test_sign_varies_per_call() {
        let keys = test_keys();
        assert_ne!(sign(&keys, "ws0", "/ls/"), sign(&keys, "ws0", "/ls/"));
    }

    #[test]
    fn test_token_response_parsing() {
        let keys: AuthKeys =
            serde_json::from_str(r#"{"t":"tok","p":"priv"}"#).unwrap();
        assert_eq!(keys.token, "tok");
        assert_eq!(keys.private, "priv");
    }
}
