use std::{convert::Infallible, future::Future, net::TcpListener, sync::Arc};

use color_eyre::Result;
use hyper::{
    body::HttpBody,
    header,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use log::{info, warn};
use serde::Serialize;

use super::https::HyperHttpsClient;
use crate::{
    alexa::{directive::DirectiveEnvelope, handle_directive},
    error::DiscoveryError,
    settings::Settings,
};

/// Directives are a few hundred bytes, anything this large is not one.
const MAX_DIRECTIVE_BYTES: usize = 64 * 1024;

#[derive(Serialize, Debug)]
struct ErrorBody {
    message: String,
}

/// Accepts skill directives as `POST` requests until Ctrl-C.
pub async fn start_directive_server(
    settings: Settings,
    https_client: HyperHttpsClient,
) -> Result<()> {
    let listener = TcpListener::bind(settings.server.listen_addr())?;

    serve_directives(listener, settings, https_client, shutdown_signal()).await
}

/// Resolves on Ctrl-C. Never resolves if the signal handler can't be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
}

pub async fn serve_directives(
    listener: TcpListener,
    settings: Settings,
    https_client: HyperHttpsClient,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let settings = Arc::new(settings);

    let make_svc = make_service_fn(move |_conn| {
        let settings = settings.clone();
        let https_client = https_client.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |request| {
                handle_request(request, settings.clone(), https_client.clone())
            }))
        }
    });

    let server = Server::from_tcp(listener)?.serve(make_svc);
    info!("Listening for directives on {}", server.local_addr());

    server.with_graceful_shutdown(shutdown).await?;

    info!("Directive server stopped");

    Ok(())
}

async fn handle_request(
    request: Request<Body>,
    settings: Arc<Settings>,
    https_client: HyperHttpsClient,
) -> Result<Response<Body>, Infallible> {
    if request.method() != Method::POST {
        return Ok(error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Directives must be POSTed".to_string(),
        ));
    }

    let declared_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared_length.is_some_and(|length| length > MAX_DIRECTIVE_BYTES) {
        return Ok(too_large_response());
    }

    let body_bytes = match read_limited(request.into_body(), MAX_DIRECTIVE_BYTES).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Ok(too_large_response()),
        Err(e) => return Ok(error_response(StatusCode::BAD_REQUEST, e.to_string())),
    };

    let de = &mut serde_json::Deserializer::from_slice(&body_bytes);
    let result = match serde_path_to_error::deserialize::<_, DirectiveEnvelope>(de) {
        Ok(envelope) => handle_directive(&envelope, &settings, &https_client).await,
        Err(e) => Err(DiscoveryError::MalformedDirective(e)),
    };

    let response = match result.and_then(|response| Ok(serde_json::to_vec(&response)?)) {
        Ok(json) => json_response(StatusCode::OK, json),
        Err(e) => {
            warn!("Directive failed: {}", e);
            error_response(e.status_code(), e.to_string())
        }
    };

    Ok(response)
}

/// Collects the body, giving up with `None` once it grows past `limit`.
async fn read_limited(mut body: Body, limit: usize) -> Result<Option<Vec<u8>>, hyper::Error> {
    let mut bytes = Vec::new();

    while let Some(chunk) = body.data().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Ok(None);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(Some(bytes))
}

fn too_large_response() -> Response<Body> {
    error_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        format!("Directives are limited to {} bytes", MAX_DIRECTIVE_BYTES),
    )
}

fn json_response(status: StatusCode, json: Vec<u8>) -> Response<Body> {
    let mut response = Response::new(Body::from(json));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}

fn error_response(status: StatusCode, message: String) -> Response<Body> {
    let json = serde_json::to_vec(&ErrorBody { message }).unwrap_or_default();
    json_response(status, json)
}
