use std::fmt::{self, Display};

use bytes::Bytes;

use crate::sample_record::SampleRecord;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("JSON payload error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a record is laid out in a POST body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadEncoding {
    UrlEncoded,
    Json,
}

impl PayloadEncoding {
    pub const fn content_type(self) -> &'static str {
        match self {
            PayloadEncoding::UrlEncoded => FORM_CONTENT_TYPE,
            PayloadEncoding::Json => JSON_CONTENT_TYPE,
        }
    }

    pub fn encode(self, record: &SampleRecord) -> Result<Bytes, PayloadError> {
        match self {
            PayloadEncoding::UrlEncoded => Ok(Bytes::from(encode_form(record))),
            PayloadEncoding::Json => Ok(Bytes::from(encode_json(record)?)),
        }
    }

    /// Decodes a body produced by [`PayloadEncoding::encode`] back into
    /// key/value pairs, values in their textual form.
    pub fn decode_pairs(self, body: &[u8]) -> Result<Vec<(String, String)>, PayloadError> {
        match self {
            PayloadEncoding::UrlEncoded => Ok(decode_form(body)),
            PayloadEncoding::Json => Ok(decode_json(body)?.to_string_pairs()),
        }
    }
}

impl Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PayloadEncoding::UrlEncoded => "urlencoded",
            PayloadEncoding::Json => "json",
        };
        write!(f, "{}", s)
    }
}

pub fn encode_form(record: &SampleRecord) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(record.to_string_pairs())
        .finish()
}

pub fn decode_form(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body).into_owned().collect()
}

pub fn encode_json(record: &SampleRecord) -> Result<Vec<u8>, PayloadError> {
    Ok(serde_json::to_vec(record)?)
}

pub fn decode_json(body: &[u8]) -> Result<SampleRecord, PayloadError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::{
        FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, PayloadEncoding, decode_form, decode_json,
        encode_form, encode_json,
    };
    use crate::sample_record::{SampleRecord, SampleValue};

    const RESERVED: &str = "%$#@'()*:/?[]@$&";

    #[test]
    fn each_encoding_carries_its_own_content_type() {
        assert_eq!(
            PayloadEncoding::UrlEncoded.content_type(),
            "application/x-www-form-urlencoded;charset=utf-8"
        );
        assert_eq!(
            PayloadEncoding::Json.content_type(),
            "application/json;charset=utf-8"
        );
        assert_ne!(FORM_CONTENT_TYPE, JSON_CONTENT_TYPE);
    }

    #[test]
    fn form_encoding_escapes_reserved_characters_and_spaces() {
        let record = SampleRecord::new().with("a b", "x&y=z").with("q?", 7_i64);

        assert_eq!(encode_form(&record), "a+b=x%26y%3Dz&q%3F=7");
    }

    #[test]
    fn form_body_of_sample_has_no_raw_reserved_separators() {
        let encoded = encode_form(&SampleRecord::sample());

        assert!(encoded.starts_with("test1=111&test%3F=%25%24%23%4011212&"));
        assert_eq!(encoded.matches('&').count(), 3);
        assert_eq!(encoded.matches('=').count(), 4);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('?'));
    }

    #[test]
    fn form_round_trip_yields_the_sample_pairs_in_order() {
        let record = SampleRecord::sample();

        let decoded = decode_form(encode_form(&record).as_bytes());

        assert_eq!(decoded, record.to_string_pairs());
    }

    #[test]
    fn json_round_trip_yields_the_original_record() {
        let record = SampleRecord::sample();

        let decoded = decode_json(&encode_json(&record).unwrap()).unwrap();

        assert_eq!(decoded, record);
        assert_eq!(decoded.get("test1"), Some(&SampleValue::Integer(111)));
    }

    #[test]
    fn json_body_keeps_integers_as_numbers_and_key_order() {
        let body = String::from_utf8(encode_json(&SampleRecord::sample()).unwrap()).unwrap();

        assert_eq!(
            body,
            r#"{"test1":111,"test?":"%$#@11212","test3":" '()*:/?[]@$&"," '()*:/?    []@$&":" '()*:/?[]@$&"}"#
        );
    }

    #[test]
    fn reserved_characters_survive_both_encodings() {
        let record = SampleRecord::new().with(RESERVED, RESERVED);

        for encoding in [PayloadEncoding::UrlEncoded, PayloadEncoding::Json] {
            let body = encoding.encode(&record).unwrap();
            let pairs = encoding.decode_pairs(&body).unwrap();
            assert_eq!(
                pairs,
                vec![(RESERVED.to_string(), RESERVED.to_string())],
                "{encoding}"
            );
        }
    }

    #[test]
    fn json_decoding_rejects_nested_values() {
        let err = decode_json(br#"{"a":{"b":1}}"#).unwrap_err();

        assert!(err.to_string().starts_with("JSON payload error"));
    }

    #[test]
    fn json_decoding_rejects_non_objects() {
        assert!(decode_json(b"[1,2,3]").is_err());
        assert!(decode_json(b"not json").is_err());
    }
}
