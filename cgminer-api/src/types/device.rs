//! `devs` and `devdetails` records.

use serde::{Deserialize, Serialize};

/// Per-device counters from `devs`.
///
/// The field set dates from GPU mining; ASIC firmware fills in a subset and
/// leaves the GPU fields at zero.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Device {
    #[serde(rename = "GPU")]
    pub gpu: i64,
    #[serde(rename = "Enabled")]
    pub enabled: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "TemperatureJnct")]
    pub temperature_junction: f64,
    #[serde(rename = "TemperatureMem")]
    pub temperature_memory: f64,
    #[serde(rename = "Fan Speed")]
    pub fan_speed: i64,
    #[serde(rename = "Fan Percent")]
    pub fan_percent: i64,
    #[serde(rename = "GPU Clock")]
    pub gpu_clock: i64,
    #[serde(rename = "Memory Clock")]
    pub memory_clock: i64,
    #[serde(rename = "GPU Voltage")]
    pub gpu_voltage: f64,
    #[serde(rename = "GPU Power")]
    pub gpu_power: f64,
    #[serde(rename = "Powertune")]
    pub powertune: i64,
    #[serde(rename = "MHS av")]
    pub mhs_av: f64,
    #[serde(rename = "MHS 5s")]
    pub mhs_5s: f64,
    #[serde(rename = "MHS 30s")]
    pub mhs_30s: f64,
    #[serde(rename = "Accepted")]
    pub accepted: i64,
    #[serde(rename = "Rejected")]
    pub rejected: i64,
    #[serde(rename = "Hardware Errors")]
    pub hardware_errors: i64,
    #[serde(rename = "Utility")]
    pub utility: f64,
    #[serde(rename = "Intensity")]
    pub intensity: String,
    #[serde(rename = "Last Share Pool")]
    pub last_share_pool: i64,
    #[serde(rename = "Last Share Time")]
    pub last_share_time: i64,
    #[serde(rename = "Total MH")]
    pub total_mh: f64,
    #[serde(rename = "Diff1 Work")]
    pub diff1_work: i64,
    #[serde(rename = "Difficulty Accepted")]
    pub difficulty_accepted: f64,
    #[serde(rename = "Difficulty Rejected")]
    pub difficulty_rejected: f64,
    #[serde(rename = "Last Share Difficulty")]
    pub last_share_difficulty: f64,
    #[serde(rename = "Last Valid Work")]
    pub last_valid_work: i64,
    #[serde(rename = "Device Hardware%")]
    pub device_hardware_percent: f64,
    #[serde(rename = "Device Rejected%")]
    pub device_rejected_percent: f64,
    #[serde(rename = "Device Elapsed")]
    pub device_elapsed: i64,
}

/// Static device description from `devdetails`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceDetail {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Kernel")]
    pub kernel: String,
    #[serde(rename = "Device Path")]
    pub device_path: String,
}
