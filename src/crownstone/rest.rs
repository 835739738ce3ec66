use log::debug;
use url::Url;

use super::stone::Stone;
use crate::{
    error::DiscoveryError,
    protocols::https::{mk_get_request, HyperHttpsClient},
    settings::RemoteCloudSettings,
};

/// Asks the cloud to embed each stone's location and ability properties.
pub const STONE_FILTER: &str = r#"{"include":["location",{"abilities":"properties"}]}"#;

pub fn stones_url(cloud: &RemoteCloudSettings, access_token: &str) -> Result<Url, DiscoveryError> {
    let base_path = match cloud.base_path.trim_matches('/') {
        "" => String::new(),
        trimmed => format!("/{trimmed}"),
    };

    let mut url = Url::parse(&format!(
        "{}://{}:{}{}/Stones/all",
        cloud.scheme.as_str(),
        cloud.hostname,
        cloud.port(),
        base_path
    ))?;

    url.query_pairs_mut()
        .append_pair("filter", STONE_FILTER)
        .append_pair("access_token", access_token);

    Ok(url)
}

pub async fn get_stones(
    cloud: &RemoteCloudSettings,
    client: &HyperHttpsClient,
    access_token: &str,
) -> Result<Vec<Stone>, DiscoveryError> {
    let url = stones_url(cloud, access_token)?;

    debug!("Fetching stones from {}{}", cloud.hostname, url.path());

    let stones: Vec<Stone> = mk_get_request(client, url.as_str(), cloud.timeout()).await?;

    Ok(stones)
}
