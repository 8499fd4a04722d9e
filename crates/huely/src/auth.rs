// Link-button pairing against the legacy /api endpoint.

use gethostname::gethostname;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport;

/// Outcome of a pairing attempt that reached the bridge.
///
/// Pairing is only denied-for-now when the link button has not been
/// pressed; that is an expected state, not an error, so it gets its own
/// variant instead of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingOutcome {
    /// The bridge issued an application key.
    Granted {
        app_key: String,
        /// Entertainment streaming key, present when requested.
        client_key: Option<String>,
    },
    /// The bridge answered but wants the link button pressed first.
    AwaitingButtonPress { reason: String },
}

#[derive(Serialize)]
struct PairingRequest<'a> {
    devicetype: &'a str,
    generateclientkey: bool,
}

#[derive(Deserialize)]
struct PairingReply {
    success: Option<PairingSuccess>,
    error: Option<PairingError>,
}

#[derive(Deserialize)]
struct PairingSuccess {
    username: String,
    clientkey: Option<String>,
}

#[derive(Deserialize)]
struct PairingError {
    description: String,
}

/// Requests an application key from an unpaired bridge.
pub struct Authenticator {
    http: reqwest::Client,
    base_url: Url,
    device_type: String,
    generate_client_key: bool,
}

impl Authenticator {
    /// Prepare pairing against the bridge at `bridge_ip`.
    ///
    /// The device type defaults to the local host name; override it
    /// with [`device_type`](Self::device_type) to control how the key
    /// shows up in the bridge's whitelist.
    pub fn new(bridge_ip: &str) -> Result<Self, Error> {
        if bridge_ip.is_empty() {
            return Err(Error::Config("bridge IP must be set".into()));
        }

        let http = transport::build_client(None)?;
        let base_url = Url::parse(&format!("https://{bridge_ip}"))?;
        let device_type = gethostname()
            .into_string()
            .map_err(|_| Error::Config("host name is not valid UTF-8".into()))?;

        Ok(Self {
            http,
            base_url,
            device_type,
            generate_client_key: true,
        })
    }

    /// Wrap an existing `reqwest::Client`. Mainly useful for tests.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            device_type: "huely".to_owned(),
            generate_client_key: true,
        })
    }

    /// Name recorded in the bridge's whitelist for the new key.
    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = device_type.into();
        self
    }

    /// Also request a client key for entertainment streaming.
    #[must_use]
    pub fn generate_client_key(mut self, generate: bool) -> Self {
        self.generate_client_key = generate;
        self
    }

    /// One pairing attempt.
    ///
    /// Returns `Ok(Granted)` with the new key, `Ok(AwaitingButtonPress)`
    /// when the bridge wants the link button pressed, and `Err` only
    /// when the bridge could not be reached or answered nonsense.
    pub async fn authenticate(&self) -> Result<PairingOutcome, Error> {
        if self.device_type.is_empty() {
            return Err(Error::Config("device type must not be empty".into()));
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let url = Url::parse(&format!("{base}/api"))?;
        debug!("POST {url}");

        let body = PairingRequest {
            devicetype: &self.device_type,
            generateclientkey: self.generate_client_key,
        };

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        // The pairing endpoint predates the {data, errors} envelope: it
        // answers with a one-element array even on failure.
        let replies: Vec<PairingReply> = match resp.json().await {
            Ok(replies) => replies,
            Err(_) => return Err(Error::BridgeUnreachable),
        };
        let Some(reply) = replies.into_iter().next() else {
            return Err(Error::BridgeUnreachable);
        };

        if let Some(success) = reply.success {
            return Ok(PairingOutcome::Granted {
                app_key: success.username,
                client_key: success.clientkey,
            });
        }

        match reply.error {
            Some(error) => Ok(PairingOutcome::AwaitingButtonPress {
                reason: error.description,
            }),
            None => Err(Error::BridgeUnreachable),
        }
    }
}
