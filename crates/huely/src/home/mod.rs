// CLIP v2 HTTP client.
//
// Wraps `reqwest::Client` with bridge-specific URL construction and
// envelope unwrapping. All resource families (lights, rooms, scenes,
// etc.) are implemented as inherent methods via separate files to keep
// this module focused on transport mechanics.

mod bridges;
mod devices;
mod entertainment;
mod lights;
mod resources;
mod rooms;
mod scenes;
mod sensors;
mod smart_scenes;
mod zones;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ApiError, Error, ErrorDetail};
use crate::models::ResourceIdentifier;
use crate::transport;

/// Every non-pairing response wraps its payload in `{data, errors}`.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Long-lived handle to a paired bridge.
///
/// Owns one pinned-TLS HTTP client with the application-key header
/// installed. The handle has no mutable state and is safe to share
/// across tasks; simultaneous conflicting writes race at the bridge.
pub struct Home {
    http: reqwest::Client,
    base_url: Url,
}

impl Home {
    /// Create a handle for a bridge at `bridge_ip` using `api_key`.
    ///
    /// Both arguments must be non-empty. No request is made here; the
    /// bridge is first contacted by the first resource operation.
    pub fn new(bridge_ip: &str, api_key: &str) -> Result<Self, Error> {
        if bridge_ip.is_empty() || api_key.is_empty() {
            return Err(Error::Config(
                "bridge IP and application key must both be set".into(),
            ));
        }

        let http = transport::build_client(Some(api_key))?;
        let base_url = Url::parse(&format!("https://{bridge_ip}"))?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages TLS and the
    /// application-key header). Mainly useful for tests and unusual
    /// transport setups.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The bridge base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Full URL for a resource-family path, e.g. `light` or `light/{id}`.
    /// An empty path addresses the whole resource catalog.
    fn resource_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = if path.is_empty() {
            format!("{base}/clip/v2/resource")
        } else {
            format!("{base}/clip/v2/resource/{path}")
        };
        Ok(Url::parse(&url)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a family listing and unwrap the envelope.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let url = self.resource_url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.unwrap_envelope(resp).await
    }

    /// GET a single resource; an empty `data` array is an error.
    pub(crate) async fn get_single<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let data: Vec<T> = self.get_list(path).await?;
        data.into_iter().next().ok_or(Error::EmptyResponse)
    }

    /// POST a new resource, returning its identifier.
    pub(crate) async fn post_single(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<ResourceIdentifier, Error> {
        let url = self.resource_url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        let data: Vec<ResourceIdentifier> = self.unwrap_envelope(resp).await?;
        data.into_iter().next().ok_or(Error::EmptyResponse)
    }

    /// PUT an update; the returned identifier list is discarded.
    pub(crate) async fn put_ack(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        let url = self.resource_url(path)?;
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.ack(resp).await
    }

    /// DELETE a resource; the returned identifier list is discarded.
    pub(crate) async fn delete_ack(&self, path: &str) -> Result<(), Error> {
        let url = self.resource_url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await.map_err(Error::Transport)?;
        self.ack(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Parse the `{data, errors}` envelope, returning `data` on success
    /// or the mapped [`ApiError`] on a non-2xx status.
    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_parts(status, &body).into());
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            // chars, not bytes: a fixed byte cut could land inside a
            // multibyte character and panic.
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        if !envelope.errors.is_empty() {
            debug!(
                "2xx response carried errors: {}",
                crate::error::join_descriptions(&envelope.errors)
            );
        }

        Ok(envelope.data)
    }

    /// Status check for operations whose response body carries nothing
    /// the caller needs.
    async fn ack(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_parts(status, &body).into())
    }
}
