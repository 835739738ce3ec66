use self::{
    directive::DirectiveEnvelope,
    discovery::{handle_discovery, DiscoveryResponse, DISCOVER, DISCOVERY_NAMESPACE},
};
use crate::{error::DiscoveryError, protocols::https::HyperHttpsClient, settings::Settings};

pub mod directive;
pub mod discovery;
pub mod endpoint;

/// Routes a skill directive to its handler. Discovery is the only directive
/// this service answers.
pub async fn handle_directive(
    envelope: &DirectiveEnvelope,
    settings: &Settings,
    client: &HyperHttpsClient,
) -> Result<DiscoveryResponse, DiscoveryError> {
    let header = &envelope.directive.header;

    match (header.namespace.as_str(), header.name.as_str()) {
        (DISCOVERY_NAMESPACE, DISCOVER) => {
            handle_discovery(&envelope.directive, settings, client).await
        }
        (namespace, name) => Err(DiscoveryError::UnsupportedDirective {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }),
    }
}
