//! `summary` records.

use serde::{Deserialize, Serialize};

use super::Number;

/// Miner-wide share and hashrate counters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Summary {
    #[serde(rename = "Elapsed")]
    pub elapsed: i64,
    // GPU and FPGA builds report MH/s, ASIC builds GH/s.
    #[serde(rename = "MHS 5s")]
    pub mhs_5s: f64,
    #[serde(rename = "MHS av")]
    pub mhs_av: f64,
    #[serde(rename = "GHS 5s")]
    pub ghs_5s: Number,
    #[serde(rename = "GHS av")]
    pub ghs_av: f64,
    #[serde(rename = "Found Blocks")]
    pub found_blocks: i64,
    #[serde(rename = "Getworks")]
    pub getworks: i64,
    #[serde(rename = "Accepted")]
    pub accepted: i64,
    #[serde(rename = "Rejected")]
    pub rejected: i64,
    #[serde(rename = "Hardware Errors")]
    pub hardware_errors: i64,
    #[serde(rename = "Utility")]
    pub utility: f64,
    #[serde(rename = "Discarded")]
    pub discarded: i64,
    #[serde(rename = "Stale")]
    pub stale: i64,
    #[serde(rename = "Get Failures")]
    pub get_failures: i64,
    #[serde(rename = "Local Work")]
    pub local_work: i64,
    #[serde(rename = "Remote Failures")]
    pub remote_failures: i64,
    #[serde(rename = "Network Blocks")]
    pub network_blocks: i64,
    #[serde(rename = "Total MH")]
    pub total_mh: f64,
    #[serde(rename = "Work Utility")]
    pub work_utility: f64,
    #[serde(rename = "Difficulty Accepted")]
    pub difficulty_accepted: f64,
    #[serde(rename = "Difficulty Rejected")]
    pub difficulty_rejected: f64,
    #[serde(rename = "Difficulty Stale")]
    pub difficulty_stale: f64,
    #[serde(rename = "Best Share")]
    pub best_share: f64,
    #[serde(rename = "Device Hardware%")]
    pub device_hardware_percent: f64,
    #[serde(rename = "Device Rejected%")]
    pub device_rejected_percent: f64,
    #[serde(rename = "Pool Rejected%")]
    pub pool_rejected_percent: f64,
    #[serde(rename = "Pool Stale%")]
    pub pool_stale_percent: f64,
    #[serde(rename = "Last getwork")]
    pub last_getwork: i64,
}
