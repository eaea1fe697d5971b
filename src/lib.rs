//! Posts a fixed sample record to a web server twice, once as an
//! `application/x-www-form-urlencoded` body and once as JSON, to exercise the
//! server's POST body handling.

pub mod cli_arguments;
pub mod error;
pub mod http_client;
pub mod payload;
pub mod post_sender;
pub mod request_id;
pub mod sample_record;
