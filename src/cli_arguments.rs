use clap::{Parser, ValueEnum};

use crate::{
    http_client::reqwest_http_client::DEFAULT_TIMEOUT, payload::PayloadEncoding,
    post_sender::DEFAULT_ORDER,
};

pub const DEFAULT_TARGET_URL: &str = "http://119.91.255.159:8080/";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "POSTs a sample record as form and JSON bodies", long_about = None)]
pub struct CliArguments {
    /// Target the POST requests are sent to
    #[arg(short, long, default_value = DEFAULT_TARGET_URL)]
    pub url: String,

    /// Which bodies to send, JSON first when all
    #[arg(short, long, value_enum, default_value_t = EncodingSelection::All)]
    pub encoding: EncodingSelection,

    /// Client timeout for each request
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Fail when the target answers with a non-2xx status
    #[arg(long)]
    pub require_success: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSelection {
    Json,
    Urlencoded,
    All,
}

impl EncodingSelection {
    pub fn encodings(self) -> Vec<PayloadEncoding> {
        match self {
            EncodingSelection::Json => vec![PayloadEncoding::Json],
            EncodingSelection::Urlencoded => vec![PayloadEncoding::UrlEncoded],
            EncodingSelection::All => DEFAULT_ORDER.to_vec(),
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::{
        cli_arguments::{CliArguments, DEFAULT_TARGET_URL, EncodingSelection},
        payload::PayloadEncoding,
    };

    #[test]
    fn test_cli_arguments_defaults() {
        let args = CliArguments::parse_from(["post-probe"]);

        assert_eq!(args.url, DEFAULT_TARGET_URL);
        assert_eq!(args.encoding, EncodingSelection::All);
        assert_eq!(args.timeout_secs, 30);
        assert!(!args.require_success);
        assert_eq!(
            args.encoding.encodings(),
            [PayloadEncoding::Json, PayloadEncoding::UrlEncoded]
        );
    }

    #[test]
    fn test_cli_arguments_long_flags() {
        let args = CliArguments::parse_from([
            "post-probe",
            "--url",
            "http://localhost:9000/",
            "--encoding",
            "urlencoded",
            "--timeout-secs",
            "5",
            "--require-success",
        ]);

        assert_eq!(args.url, "http://localhost:9000/");
        assert_eq!(args.encoding, EncodingSelection::Urlencoded);
        assert_eq!(args.timeout_secs, 5);
        assert!(args.require_success);
    }

    #[test]
    fn test_cli_arguments_short_flags() {
        let args =
            CliArguments::parse_from(["post-probe", "-u", "https://example.com", "-e", "json", "-t", "2"]);

        assert_eq!(args.url, "https://example.com");
        assert_eq!(args.encoding.encodings(), [PayloadEncoding::Json]);
        assert_eq!(args.timeout_secs, 2);
    }

    #[test]
    fn test_cli_arguments_rejects_zero_timeout() {
        let result = CliArguments::try_parse_from(["post-probe", "--timeout-secs", "0"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_arguments_rejects_unknown_encoding() {
        let result = CliArguments::try_parse_from(["post-probe", "--encoding", "xml"]);

        assert!(result.is_err());
    }
}
