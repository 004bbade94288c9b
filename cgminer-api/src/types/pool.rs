//! `pools` records.

use serde::{Deserialize, Serialize};

use super::Number;

/// One configured mining pool.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Pool {
    /// Pool index, the parameter for `enablepool`, `switchpool` and friends.
    #[serde(rename = "POOL")]
    pub pool: i64,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Quota")]
    pub quota: i64,
    #[serde(rename = "Long Poll")]
    pub long_poll: String,
    #[serde(rename = "Getworks")]
    pub getworks: i64,
    #[serde(rename = "Accepted")]
    pub accepted: i64,
    #[serde(rename = "Rejected")]
    pub rejected: i64,
    #[serde(rename = "Works")]
    pub works: i64,
    #[serde(rename = "Discarded")]
    pub discarded: i64,
    #[serde(rename = "Stale")]
    pub stale: i64,
    #[serde(rename = "Get Failures")]
    pub get_failures: i64,
    #[serde(rename = "Remote Failures")]
    pub remote_failures: i64,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Last Share Time")]
    pub last_share_time: String,
    #[serde(rename = "Diff1 Shares")]
    pub diff1_shares: i64,
    #[serde(rename = "Proxy Type")]
    pub proxy_type: String,
    #[serde(rename = "Proxy")]
    pub proxy: String,
    #[serde(rename = "Difficulty Accepted")]
    pub difficulty_accepted: f64,
    #[serde(rename = "Difficulty Rejected")]
    pub difficulty_rejected: f64,
    #[serde(rename = "Difficulty Stale")]
    pub difficulty_stale: f64,
    #[serde(rename = "Last Share Difficulty")]
    pub last_share_difficulty: f64,
    #[serde(rename = "Has Stratum")]
    pub has_stratum: bool,
    #[serde(rename = "Stratum Active")]
    pub stratum_active: bool,
    #[serde(rename = "Stratum URL")]
    pub stratum_url: String,
    #[serde(rename = "Has GBT")]
    pub has_gbt: bool,
    /// Quoted on bmminer builds, bare on cgminer builds.
    #[serde(rename = "Best Share")]
    pub best_share: Number,
    #[serde(rename = "Pool Rejected%")]
    pub pool_rejected_percent: f64,
    #[serde(rename = "Pool Stale%")]
    pub pool_stale_percent: f64,
}
