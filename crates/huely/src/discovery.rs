// Bridge discovery: mDNS first, cloud directory as fallback.

use std::fmt;
use std::time::Duration;

use mdns_sd::{ServiceDaemon, ServiceEvent};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Error;

/// Service type the bridge advertises on the local network.
const BRIDGE_SERVICE: &str = "_hue._tcp.local.";

/// Cloud directory queried when mDNS comes up empty.
const DISCOVERY_URL: &str = "https://discovery.meethue.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A bridge found on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeInfo {
    /// mDNS instance name, or `"N/A"` when found via the cloud directory.
    pub instance: String,
    /// Advertised host name (mDNS) or bridge id (cloud directory).
    pub host_name: String,
    /// IPv4 address on the local network.
    pub ip_address: String,
}

impl fmt::Display for BridgeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bridge{{instance: {:?}, host: {:?}, ip: {:?}}}",
            self.instance, self.host_name, self.ip_address
        )
    }
}

/// Response entry from the cloud directory.
#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    id: String,
    internalipaddress: String,
}

/// Finds a bridge on the local network.
///
/// mDNS browsing runs first, bounded by [`timeout`](Self::timeout).
/// When it times out or fails, the public discovery endpoint is queried
/// unless the fallback is disabled. The first bridge found wins.
pub struct BridgeDiscovery {
    timeout: Duration,
    url_fallback: bool,
    discovery_url: String,
}

impl Default for BridgeDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeDiscovery {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            url_fallback: true,
            discovery_url: DISCOVERY_URL.to_owned(),
        }
    }

    /// How long to browse mDNS before giving up.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip the cloud directory when mDNS finds nothing.
    #[must_use]
    pub fn disable_url_fallback(mut self) -> Self {
        self.url_fallback = false;
        self
    }

    /// Override the cloud directory endpoint. Mainly useful for tests.
    #[must_use]
    pub fn discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    /// Find the first reachable bridge.
    pub async fn discover(&self) -> Result<BridgeInfo, Error> {
        match self.mdns_discover().await {
            Ok(bridge) => Ok(bridge),
            Err(mdns_err) if self.url_fallback => {
                warn!("mDNS discovery failed ({mdns_err}), trying {}", self.discovery_url);
                self.url_discover().await
            }
            Err(mdns_err) => Err(mdns_err),
        }
    }

    async fn mdns_discover(&self) -> Result<BridgeInfo, Error> {
        let daemon = ServiceDaemon::new().map_err(|e| Error::Mdns(e.to_string()))?;
        let receiver = daemon
            .browse(BRIDGE_SERVICE)
            .map_err(|e| Error::Mdns(e.to_string()))?;

        let result = tokio::time::timeout(self.timeout, async {
            loop {
                match receiver.recv_async().await {
                    Ok(ServiceEvent::ServiceResolved(info)) => {
                        let Some(ip) = info
                            .get_addresses()
                            .iter()
                            .find(|a| a.is_ipv4())
                            .map(ToString::to_string)
                        else {
                            debug!("resolved {} without an IPv4 address", info.get_fullname());
                            continue;
                        };

                        let instance = info
                            .get_fullname()
                            .trim_end_matches(BRIDGE_SERVICE)
                            .trim_end_matches('.')
                            .replace('\\', "");

                        return Ok(BridgeInfo {
                            instance,
                            host_name: info.get_hostname().to_owned(),
                            ip_address: ip,
                        });
                    }
                    Ok(other) => debug!("mDNS event: {other:?}"),
                    Err(_) => return Err(Error::BridgeNotFound),
                }
            }
        })
        .await;

        let _ = daemon.stop_browse(BRIDGE_SERVICE);
        let _ = daemon.shutdown();

        match result {
            Ok(found) => found,
            Err(_elapsed) => Err(Error::DiscoveryTimeout),
        }
    }

    async fn url_discover(&self) -> Result<BridgeInfo, Error> {
        // The directory is a public endpoint with a regular web PKI
        // certificate, so the pinned-root client does not apply here.
        let http = reqwest::Client::new();
        debug!("GET {}", self.discovery_url);

        let resp = http
            .get(&self.discovery_url)
            .send()
            .await
            .map_err(Error::Transport)?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::TooManyAttempts);
        }

        let entries: Vec<DirectoryEntry> = resp.json().await.map_err(Error::Transport)?;
        let first = entries.into_iter().next().ok_or(Error::BridgeNotFound)?;

        Ok(BridgeInfo {
            instance: "N/A".to_owned(),
            host_name: first.id,
            ip_address: first.internalipaddress,
        })
    }
}
