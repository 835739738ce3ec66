use log::{debug, info};
use serde::Serialize;

use super::{
    directive::{Directive, Event, EventEnvelope, Header},
    endpoint::Endpoint,
};
use crate::{
    crownstone::{rest::get_stones, stone::Stone},
    error::DiscoveryError,
    protocols::https::HyperHttpsClient,
    settings::Settings,
};

pub const DISCOVERY_NAMESPACE: &str = "Alexa.Discovery";
pub const DISCOVER: &str = "Discover";
pub const DISCOVER_RESPONSE: &str = "Discover.Response";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiscoveryPayload {
    pub endpoints: Vec<Endpoint>,
}

pub type DiscoveryResponse = EventEnvelope<DiscoveryPayload>;

/// Builds the response event for the stones found in the user's spheres.
pub fn discovery_response(header: &Header, stones: &[Stone]) -> DiscoveryResponse {
    let endpoints = stones.iter().map(Endpoint::from).collect();

    EventEnvelope {
        event: Event {
            header: header.response(DISCOVER_RESPONSE),
            payload: DiscoveryPayload { endpoints },
        },
    }
}

pub async fn handle_discovery(
    directive: &Directive,
    settings: &Settings,
    client: &HyperHttpsClient,
) -> Result<DiscoveryResponse, DiscoveryError> {
    let access_token = directive
        .access_token()
        .ok_or(DiscoveryError::MissingToken)?;

    let stones = get_stones(&settings.remote_cloud, client, access_token).await?;
    let response = discovery_response(&directive.header, &stones);

    info!(
        "Discovered {} endpoints",
        response.event.payload.endpoints.len()
    );
    if log::log_enabled!(log::Level::Debug) {
        debug!("Discovery: {}", serde_json::to_string(&response).unwrap_or_default());
    }

    Ok(response)
}
