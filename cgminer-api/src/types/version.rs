//! `version` records.

use serde::{Deserialize, Serialize};

/// Miner software and hardware model.
///
/// Firmware built on bmminer reports `BMMiner`, firmware built on cgminer
/// reports `CGMiner`; the other is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Version {
    #[serde(rename = "BMMiner", skip_serializing_if = "String::is_empty")]
    pub bmminer: String,
    #[serde(rename = "CGMiner", skip_serializing_if = "String::is_empty")]
    pub cgminer: String,
    #[serde(rename = "API")]
    pub api: String,
    #[serde(rename = "Miner")]
    pub miner: String,
    #[serde(rename = "CompileTime")]
    pub compile_time: String,
    /// Hardware model, e.g. "Antminer S9".
    #[serde(rename = "Type")]
    pub miner_type: String,
}
