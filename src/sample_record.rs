//! The key/value record carried by every probe request.
//!
//! Keys and values deliberately include reserved URL characters and runs of
//! whitespace so that a server's body decoding can be checked against what
//! was sent.

use std::fmt::{self, Display};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Integer(i64),
    Text(String),
}

impl Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Integer(n) => write!(f, "{}", n),
            SampleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SampleValue {
    fn from(value: i64) -> Self {
        SampleValue::Integer(value)
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::Text(value.to_string())
    }
}

impl From<String> for SampleValue {
    fn from(value: String) -> Self {
        SampleValue::Text(value)
    }
}

/// Ordered mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    entries: Vec<(String, SampleValue)>,
}

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed record every send procedure posts.
    pub fn sample() -> Self {
        Self::new()
            .with("test1", 111_i64)
            .with("test?", "%$#@11212")
            .with("test3", " '()*:/?[]@$&")
            .with(" '()*:/?    []@$&", " '()*:/?[]@$&")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<SampleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Replaces the value in place when the key already exists.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SampleValue>,
    ) -> Option<SampleValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SampleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SampleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys with their values rendered as text, which is all a form body
    /// can carry.
    pub fn to_string_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl Serialize for SampleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SampleRecordVisitor;

impl<'de> Visitor<'de> for SampleRecordVisitor {
    type Value = SampleRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string keys to integer or string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut record = SampleRecord::new();
        while let Some((key, value)) = access.next_entry::<String, SampleValue>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for SampleRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SampleRecordVisitor)
    }
}
