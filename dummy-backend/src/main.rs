use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::{
    Json, Router,
    routing::{get, post},
};
use clap::Parser;
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FORM_MIME: &str = "application/x-www-form-urlencoded";
const JSON_MIME: &str = "application/json";

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    port: u16,
}

/// Decodes a POST body into key/value pairs according to its media type.
fn decode_body(content_type: &str, body: &[u8]) -> Result<Vec<(String, String)>, StatusCode> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        FORM_MIME => Ok(form_urlencoded::parse(body).into_owned().collect()),
        JSON_MIME => {
            let object: serde_json::Map<String, Value> =
                serde_json::from_slice(body).map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(object
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(text) => (key, text),
                    other => (key, other.to_string()),
                })
                .collect())
        }
        _ => Err(StatusCode::UNSUPPORTED_MEDIA_TYPE),
    }
}

async fn capture(headers: HeaderMap, body: Bytes) -> Response {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match decode_body(content_type, &body) {
        Ok(pairs) => {
            info!(request_id, content_type, "Captured {:?}", pairs);
            Json(pairs).into_response()
        }
        Err(status) => {
            warn!(request_id, content_type, %status, "Rejected POST body");
            status.into_response()
        }
    }
}

async fn health() -> impl IntoResponse {
    "PONG"
}

fn router() -> Router {
    Router::new()
        .route("/", post(capture))
        .route("/health", get(health))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Args = Args::parse();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!("Capture backend listening on port {}", args.port);

    axum::serve(listener, router()).await
}
