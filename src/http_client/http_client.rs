use async_trait::async_trait;

use crate::http_client::{error::Error, request::Request, response::Response};

/// Sends one request and hands back the raw response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}
