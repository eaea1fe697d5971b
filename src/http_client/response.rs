use bytes::Bytes;

use crate::http_client::request::Headers;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::http_client::{request::Headers, response::Response};

    fn response(status: u16) -> Response {
        Response {
            status,
            headers: Headers::default(),
            body: Bytes::new(),
        }
    }

    #[test]
    fn only_2xx_is_success() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
