// Pinned-root TLS transport for the Hue bridge.
//
// The bridge serves a certificate issued by the vendor PKI under its LAN
// IP, so standard hostname verification cannot succeed. Accepting any
// certificate is not an option either: this module replaces hostname
// verification with chain verification against an embedded bundle of
// vendor root CAs.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::WebPkiSupportedAlgorithms;
use rustls::pki_types::{CertificateDer, ServerName, TrustAnchor, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};

use crate::error::Error;

/// Header carrying the application key on every authenticated request.
/// The bridge treats it case-insensitively but this exact casing is what
/// the vendor tooling emits.
pub const APPLICATION_KEY_HEADER: &str = "hue-application-key";

/// Vendor root CAs that sign every bridge certificate.
static HUE_BRIDGE_ROOT_CAS: &str = include_str!("../certs/hue_bridge_root_cas.pem");

/// Build an HTTPS client for a bridge.
///
/// The client trusts only the embedded vendor roots and skips hostname
/// verification in favor of [`PinnedRootVerifier`]. When `api_key` is
/// non-empty it is installed as a default `hue-application-key` header;
/// the pairing flow passes `None` and sends no header at all.
pub(crate) fn build_client(api_key: Option<&str>) -> Result<reqwest::Client, Error> {
    let tls = pinned_tls_config(HUE_BRIDGE_ROOT_CAS.as_bytes())?;

    let mut headers = HeaderMap::new();
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        let mut value = HeaderValue::from_str(key)
            .map_err(|e| Error::Config(format!("invalid application key header value: {e}")))?;
        value.set_sensitive(true);
        headers.insert(APPLICATION_KEY_HEADER, value);
    }

    reqwest::Client::builder()
        .use_preconfigured_tls(tls)
        .default_headers(headers)
        .build()
        .map_err(Error::Transport)
}

/// rustls config: pinned roots, custom chain verification, no client auth.
fn pinned_tls_config(root_pem: &[u8]) -> Result<rustls::ClientConfig, Error> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let verifier = PinnedRootVerifier::from_pem(
        root_pem,
        provider.signature_verification_algorithms,
    )?;

    let mut config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::Config(format!("failed to configure TLS: {e}")))?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();

    // The bridge speaks both; let ALPN pick.
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

    Ok(config)
}

/// Certificate verifier that checks the presented chain against a fixed
/// set of trust anchors with the `serverAuth` extended key usage, and
/// deliberately ignores the dialed server name.
///
/// rustls only invokes a verifier once a non-empty certificate chain has
/// been presented, so the empty-chain case is rejected before we run.
#[derive(Debug)]
pub(crate) struct PinnedRootVerifier {
    roots: Vec<TrustAnchor<'static>>,
    algorithms: WebPkiSupportedAlgorithms,
}

impl PinnedRootVerifier {
    /// Parse a PEM bundle into trust anchors.
    ///
    /// Fails with [`Error::Config`] when the bundle is unparseable or
    /// contains no certificates.
    pub(crate) fn from_pem(
        pem: &[u8],
        algorithms: WebPkiSupportedAlgorithms,
    ) -> Result<Self, Error> {
        let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut &pem[..])
            .collect::<Result<_, _>>()
            .map_err(|e| Error::Config(format!("failed to parse bridge root CA bundle: {e}")))?;

        if certs.is_empty() {
            return Err(Error::Config(
                "bridge root CA bundle contains no certificates".into(),
            ));
        }

        let roots = certs
            .iter()
            .map(|cert| webpki::anchor_from_trusted_cert(cert).map(|a| a.to_owned()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Config(format!("invalid bridge root CA certificate: {e}")))?;

        Ok(Self { roots, algorithms })
    }
}

impl ServerCertVerifier for PinnedRootVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        let leaf = webpki::EndEntityCert::try_from(end_entity).map_err(pki_error)?;

        leaf.verify_for_usage(
            self.algorithms.all,
            &self.roots,
            intermediates,
            now,
            webpki::KeyUsage::server_auth(),
            None,
            None,
        )
        .map_err(pki_error)?;

        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}

/// Surface the webpki verification error unchanged.
fn pki_error(err: webpki::Error) -> rustls::Error {
    rustls::Error::InvalidCertificate(rustls::CertificateError::Other(rustls::OtherError(
        Arc::new(err),
    )))
}
