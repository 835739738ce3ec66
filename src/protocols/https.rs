use std::{io::BufReader, time::Duration};

use color_eyre::Result;
use eyre::eyre;
use hyper::{body::Bytes, header, Request};
use hyper_rustls::HttpsConnectorBuilder;
use serde::de::DeserializeOwned;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};

use crate::{
    error::DiscoveryError,
    settings::{RemoteCloudSettings, Scheme, Settings},
};

pub type HyperHttpsClient = hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

pub fn mk_hyper_https_client(settings: &Settings) -> Result<HyperHttpsClient> {
    let cloud = &settings.remote_cloud;

    let builder = match mk_tls_config(cloud)? {
        Some(tls_config) => HttpsConnectorBuilder::new().with_tls_config(tls_config),
        None => HttpsConnectorBuilder::new().with_native_roots(),
    };

    let builder = match cloud.scheme {
        Scheme::Https => builder.https_only(),
        Scheme::Http => builder.https_or_http(),
    };

    let https = builder.enable_http1().build();

    // Build the hyper client
    let client = hyper::Client::builder().build(https);

    Ok(client)
}

/// Returns `None` when the platform's native roots should be trusted.
fn mk_tls_config(cloud: &RemoteCloudSettings) -> Result<Option<ClientConfig>> {
    let mut roots = RootCertStore::empty();

    match (&cloud.ca_cert, cloud.scheme) {
        // Allow overriding the trusted CA certificate for privately hosted clouds
        (Some(pem), _) => {
            let certs = rustls_pemfile::certs(&mut BufReader::new(pem.as_bytes()))?;
            let (added, _ignored) = roots.add_parsable_certificates(&certs);
            if added == 0 {
                return Err(eyre!(
                    "No usable certificate found in remote_cloud.ca_cert. Check your config."
                ));
            }
        }
        // Plain http never negotiates TLS, no roots needed
        (None, Scheme::Http) => {}
        (None, Scheme::Https) => return Ok(None),
    }

    let tls_config = ClientConfig::builder()
        .with_safe_defaults()
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(Some(tls_config))
}

/// GET `uri` as JSON. Non-2xx responses are rejected before the body is read.
pub async fn mk_get_request<T: DeserializeOwned>(
    client: &HyperHttpsClient,
    uri: &str,
    timeout: Duration,
) -> Result<T, DiscoveryError> {
    let request = Request::builder()
        .method("GET")
        .header(header::ACCEPT, "application/json")
        .uri(uri)
        .body(hyper::Body::empty())?;

    let body_bytes = tokio::time::timeout(timeout, fetch_body(client, request))
        .await
        .map_err(|_| DiscoveryError::Timeout(timeout))??;

    let de = &mut serde_json::Deserializer::from_slice(&body_bytes);
    let response: T =
        serde_path_to_error::deserialize(de).map_err(DiscoveryError::MalformedPayload)?;

    Ok(response)
}

async fn fetch_body(
    client: &HyperHttpsClient,
    request: Request<hyper::Body>,
) -> Result<Bytes, DiscoveryError> {
    let result = client.request(request).await?;

    let status = result.status();
    if !status.is_success() {
        return Err(DiscoveryError::Upstream { status });
    }

    let body_bytes = hyper::body::to_bytes(result.into_body()).await?;

    Ok(body_bytes)
}
