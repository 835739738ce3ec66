use color_eyre::Result;
use protocols::http_server::start_directive_server;
use protocols::https::mk_hyper_https_client;

use crate::settings::read_settings;

mod alexa;
mod crownstone;
mod error;
mod protocols;
mod settings;

#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = read_settings()?;
    let https_client = mk_hyper_https_client(&settings)?;

    start_directive_server(settings, https_client).await?;

    Ok(())
}
