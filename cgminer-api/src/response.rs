//! Response envelopes.
//!
//! Every response has the same outer shape: a `STATUS` array, an `id`, and one
//! array of records under a command-specific key:
//!
//! ```json
//! {"STATUS":[{"STATUS":"S","When":1,"Code":22,"Msg":"CGMiner versions","Description":""}],
//!  "id":1,
//!  "VERSION":[{"CGMiner":"4.9.0","API":"3.1"}]}
//! ```
//!
//! Each envelope type here names its key and record type. A missing key
//! decodes as an empty list; whether that is acceptable is the caller's
//! decision, see [`exactly_one`].

use serde::Deserialize;
use serde::de::{self, DeserializeOwned, Deserializer};

use crate::error::{Error, Result};
use crate::stats::GenericStats;
use crate::status::StatusEntry;
use crate::types::{Device, DeviceDetail, Pool, Summary, Version};

/// Decoded response that carries a status list.
pub trait Response: DeserializeOwned + Send {
    fn status(&self) -> &[StatusEntry];
}

/// Envelope without a payload.
///
/// Used for control commands, and to status-check responses whose payload
/// the caller does not want.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenericResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
}

impl Response for GenericResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "VERSION")]
    pub version: Vec<Version>,
}

impl Response for VersionResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "SUMMARY")]
    pub summary: Vec<Summary>,
}

impl Response for SummaryResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "STATS")]
    pub stats: Vec<GenericStats>,
}

impl Response for StatsResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevsResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "DEVS")]
    pub devs: Vec<Device>,
}

impl Response for DevsResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevDetailsResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "DEVDETAILS")]
    pub dev_details: Vec<DeviceDetail>,
}

impl Response for DevDetailsResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolsResponse {
    #[serde(rename = "STATUS")]
    pub status: Vec<StatusEntry>,
    pub id: i64,
    #[serde(rename = "POOLS")]
    pub pools: Vec<Pool>,
}

impl Response for PoolsResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

/// Any envelope, kept whole as JSON next to its status list.
///
/// For commands this crate has no record type for.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: Vec<StatusEntry>,
    pub body: serde_json::Value,
}

impl Response for RawResponse {
    fn status(&self) -> &[StatusEntry] {
        &self.status
    }
}

impl<'de> Deserialize<'de> for RawResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = serde_json::Value::deserialize(deserializer)?;
        let status = match body.get("STATUS") {
            Some(status) => Vec::<StatusEntry>::deserialize(status).map_err(de::Error::custom)?,
            None => Vec::new(),
        };
        Ok(Self { status, body })
    }
}

/// Take the only record of a singleton command.
///
/// `key` names the payload array in the error.
pub fn exactly_one<T>(records: Vec<T>, key: &'static str) -> Result<T> {
    let count = records.len();
    let mut records = records.into_iter();
    match (records.next(), records.next()) {
        (Some(record), None) => Ok(record),
        _ => Err(Error::Cardinality { key, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_record() {
        assert_eq!(exactly_one(vec![7], "SUMMARY").unwrap(), 7);
    }

    #[test]
    fn zero_or_many_records_fail() {
        match exactly_one(Vec::<u8>::new(), "SUMMARY") {
            Err(Error::Cardinality { key, count }) => {
                assert_eq!(key, "SUMMARY");
                assert_eq!(count, 0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            exactly_one(vec![1, 2], "VERSION"),
            Err(Error::Cardinality { count: 2, .. })
        ));
    }

    #[test]
    fn missing_payload_key_is_empty() {
        let resp: SummaryResponse =
            serde_json::from_str(r#"{"STATUS":[{"STATUS":"S"}],"id":1}"#).unwrap();
        assert!(resp.summary.is_empty());
        assert_eq!(resp.status().len(), 1);
    }

    #[test]
    fn raw_response_keeps_body() {
        let resp: RawResponse = serde_json::from_str(
            r#"{"STATUS":[{"STATUS":"I","Code":9}],"id":1,"COIN":[{"Hash Method":"sha256"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.status().len(), 1);
        assert_eq!(resp.status[0].code, 9);
        assert_eq!(resp.body["COIN"][0]["Hash Method"], "sha256");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let resp: GenericResponse =
            serde_json::from_str(r#"{"STATUS":[],"id":3,"POOLS":[{"POOL":0}]}"#).unwrap();
        assert_eq!(resp.id, 3);
    }
}
