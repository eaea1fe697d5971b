use std::{sync::Arc, time::Instant};

use http::header::CONTENT_TYPE;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::{
    error::ProbeError,
    http_client::{http_client::HttpClient, request::Request, response::Response},
    payload::PayloadEncoding,
    request_id::{X_REQUEST_ID, new_request_id},
    sample_record::SampleRecord,
};

/// JSON first, then the form body.
pub const DEFAULT_ORDER: [PayloadEncoding; 2] = [PayloadEncoding::Json, PayloadEncoding::UrlEncoded];

#[derive(Clone)]
pub struct PostSender {
    client: Arc<dyn HttpClient + Send + Sync>,
    url: String,
    require_success: bool,
}

impl PostSender {
    pub fn new(client: Arc<dyn HttpClient + Send + Sync>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            require_success: false,
        }
    }

    pub fn require_success(mut self, require_success: bool) -> Self {
        self.require_success = require_success;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn send_urlencoded(&self) -> Result<Response, ProbeError> {
        self.send(PayloadEncoding::UrlEncoded, &SampleRecord::sample())
            .await
    }

    pub async fn send_json(&self) -> Result<Response, ProbeError> {
        self.send(PayloadEncoding::Json, &SampleRecord::sample())
            .await
    }

    /// Sends one POST per encoding, in order, stopping at the first failure.
    pub async fn run(&self, encodings: &[PayloadEncoding]) -> Result<Vec<Response>, ProbeError> {
        let record = SampleRecord::sample();
        let mut responses = Vec::with_capacity(encodings.len());
        for &encoding in encodings {
            responses.push(self.send(encoding, &record).await?);
        }
        Ok(responses)
    }

    pub async fn send(
        &self,
        encoding: PayloadEncoding,
        record: &SampleRecord,
    ) -> Result<Response, ProbeError> {
        let request_id = new_request_id();
        let span = info_span!("post", %encoding, request_id = %request_id);

        async move {
            let request = build_request(&self.url, encoding, record, &request_id)?;
            debug!(body = %String::from_utf8_lossy(&request.body), "Encoded sample record");

            let started = Instant::now();
            let response = self.client.execute(request).await?;

            info!(
                status = response.status,
                elapsed_ms = started.elapsed().as_millis() as u64,
                body_len = response.body.len(),
                "POST sent to {}",
                self.url
            );

            if !response.is_success() {
                if self.require_success {
                    return Err(ProbeError::UnexpectedStatus {
                        encoding,
                        status: response.status,
                    });
                }
                warn!(status = response.status, "Target answered with a non-2xx status");
            }

            Ok(response)
        }
        .instrument(span)
        .await
    }
}

pub fn build_request(
    url: &str,
    encoding: PayloadEncoding,
    record: &SampleRecord,
    request_id: &str,
) -> Result<Request, ProbeError> {
    let body = encoding.encode(record)?;

    Ok(Request::post(url, body)
        .with_header(CONTENT_TYPE.as_str(), encoding.content_type())
        .with_header(X_REQUEST_ID.as_str(), request_id))
}
