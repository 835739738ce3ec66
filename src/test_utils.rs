use crate::{
    protocols::https::{mk_hyper_https_client, HyperHttpsClient},
    settings::{RemoteCloudSettings, Scheme, ServerSettings, Settings},
};

pub fn cloud_settings(hostname: &str, base_path: &str) -> RemoteCloudSettings {
    RemoteCloudSettings {
        hostname: hostname.to_string(),
        base_path: base_path.to_string(),
        port: None,
        scheme: Scheme::Https,
        ca_cert: None,
        timeout_seconds: None,
    }
}

/// A plain http cloud on localhost.
pub fn local_cloud(port: u16, base_path: &str) -> RemoteCloudSettings {
    RemoteCloudSettings {
        port: Some(port),
        scheme: Scheme::Http,
        timeout_seconds: Some(5),
        ..cloud_settings("127.0.0.1", base_path)
    }
}

pub fn settings_for(cloud: RemoteCloudSettings) -> Settings {
    Settings {
        remote_cloud: cloud,
        server: ServerSettings::default(),
    }
}

pub fn mk_client(cloud: &RemoteCloudSettings) -> HyperHttpsClient {
    mk_hyper_https_client(&settings_for(cloud.clone())).unwrap()
}

/// Cloud settings and a client pointed at a mockito server.
pub fn mk_test_client(
    server: &mockito::ServerGuard,
    base_path: &str,
) -> (RemoteCloudSettings, HyperHttpsClient) {
    let port = server
        .host_with_port()
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse().ok())
        .unwrap();

    let cloud = local_cloud(port, base_path);
    let client = mk_client(&cloud);

    (cloud, client)
}
