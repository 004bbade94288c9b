//! Per-model stats shapes.
//!
//! Each shape lists the fields one hardware model actually reports, with
//! plain numeric types where [`GenericStats`] has to accept several
//! encodings. Shapes are declared through `narrowed_stats!`, which also
//! generates the field-by-field projection from [`GenericStats`]. A shape
//! field must share its name with a [`GenericStats`] field, and its type must
//! implement [`Project`] from that field's type; anything else fails to
//! compile rather than silently dropping data.

use serde::Serialize;

use super::GenericStats;
use crate::types::Number;

/// Conversion from a [`GenericStats`] field to a model field.
///
/// Identity for fields that share a type; [`Number`] fields collapse to
/// their numeric value, zero when absent.
pub trait Project<T> {
    fn project(source: &T) -> Self;
}

impl<T: Clone> Project<T> for T {
    fn project(source: &T) -> Self {
        source.clone()
    }
}

impl Project<Number> for f64 {
    fn project(source: &Number) -> Self {
        source.as_f64()
    }
}

impl Project<Number> for i64 {
    fn project(source: &Number) -> Self {
        source.as_i64()
    }
}

impl Project<Number> for i32 {
    fn project(source: &Number) -> Self {
        source.as_i32()
    }
}

/// Declare a model shape and its projection from [`GenericStats`].
macro_rules! narrowed_stats {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident: $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize)]
        pub struct $name {
            $( $(#[$field_meta])* pub $field: $ty, )*
        }

        impl From<&GenericStats> for $name {
            fn from(stats: &GenericStats) -> Self {
                Self {
                    $( $field: <$ty as Project<_>>::project(&stats.$field), )*
                }
            }
        }
    };
}

narrowed_stats! {
    /// Antminer S7 (cgminer firmware, chains 1 to 3).
    StatsS7 {
        #[serde(rename = "CGMiner")]
        cgminer: String,
        #[serde(rename = "Miner")]
        miner: String,
        #[serde(rename = "CompileTime")]
        compile_time: String,
        #[serde(rename = "Type")]
        miner_type: String,
        #[serde(rename = "STATS")]
        stats: i64,
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Elapsed")]
        elapsed: i64,
        #[serde(rename = "Calls")]
        calls: i64,
        #[serde(rename = "Wait")]
        wait: f64,
        #[serde(rename = "Max")]
        max: f64,
        #[serde(rename = "Min")]
        min: f64,
        #[serde(rename = "GHS 5s")]
        ghs_5s: f64,
        #[serde(rename = "GHS av")]
        ghs_average: f64,
        baud: i64,
        miner_count: i32,
        asic_count: i64,
        timeout: i64,
        frequency: f64,
        voltage: f64,
        fan_num: i32,
        fan1: i32,
        fan3: i32,
        temp_num: i32,
        temp1: i32,
        temp2: i32,
        temp3: i32,
        temp_avg: i32,
        temp_max: i32,
        #[serde(rename = "Device Hardware%")]
        device_hardware_percent: f64,
        no_matching_work: i64,
        #[serde(rename = "USB Pipe")]
        usb_pipe: i64,
        hwv1: i64,
        hwv2: i64,
        hwv3: i64,
        hwv4: i64,
        chain_acn1: i64,
        chain_acn2: i64,
        chain_acn3: i64,
        chain_acs1: String,
        chain_acs2: String,
        chain_acs3: String,
    }
}

narrowed_stats! {
    /// Antminer S9 (bmminer firmware, chains 6 to 8).
    StatsS9 {
        #[serde(rename = "BMMiner")]
        bmminer: String,
        #[serde(rename = "API")]
        api: String,
        #[serde(rename = "Miner")]
        miner: String,
        #[serde(rename = "CompileTime")]
        compile_time: String,
        #[serde(rename = "Type")]
        miner_type: String,
        miner_id: String,
        miner_version: String,
        miner_count: i32,
        #[serde(rename = "Elapsed")]
        elapsed: i64,
        #[serde(rename = "Wait")]
        wait: f64,
        #[serde(rename = "Device Hardware%")]
        device_hardware_percent: f64,
        #[serde(rename = "STATS")]
        stats: i64,
        #[serde(rename = "Max")]
        max: f64,
        no_matching_work: i64,
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Calls")]
        calls: i64,
        #[serde(rename = "Min")]
        min: f64,
        total_acn: i32,
        total_rate: f64,
        #[serde(rename = "total_rateideal")]
        total_rate_ideal: f64,
        #[serde(rename = "total_freqavg")]
        total_frequency_avg: f64,
        frequency: f64,
        #[serde(rename = "freq_avg6")]
        frequency_avg6: f64,
        #[serde(rename = "freq_avg7")]
        frequency_avg7: f64,
        #[serde(rename = "freq_avg8")]
        frequency_avg8: f64,
        fan_num: i32,
        fan3: i32,
        fan6: i32,
        temp_max: i32,
        temp_num: i32,
        temp6: i32,
        temp7: i32,
        temp8: i32,
        temp2_6: i32,
        temp2_7: i32,
        temp2_8: i32,
        #[serde(rename = "GHS 5s")]
        ghs_5s: f64,
        #[serde(rename = "GHS av")]
        ghs_average: f64,
        chain_hw6: i64,
        chain_hw7: i64,
        chain_hw8: i64,
        chain_acs6: String,
        chain_acs7: String,
        chain_acs8: String,
        chain_acn6: i64,
        chain_acn7: i64,
        chain_acn8: i64,
        chain_rate6: f64,
        chain_rate7: f64,
        chain_rate8: f64,
        #[serde(rename = "chain_rateideal6")]
        chain_rate_ideal6: f64,
        #[serde(rename = "chain_rateideal7")]
        chain_rate_ideal7: f64,
        #[serde(rename = "chain_rateideal8")]
        chain_rate_ideal8: f64,
        #[serde(rename = "chain_opencore_6")]
        chain_open_core6: i64,
        #[serde(rename = "chain_opencore_7")]
        chain_open_core7: i64,
        #[serde(rename = "chain_opencore_8")]
        chain_open_core8: i64,
        #[serde(rename = "chain_offside_6")]
        chain_offside6: i64,
        #[serde(rename = "chain_offside_7")]
        chain_offside7: i64,
        #[serde(rename = "chain_offside_8")]
        chain_offside8: i64,
        chain_xtime6: String,
        chain_xtime7: String,
        chain_xtime8: String,
    }
}

narrowed_stats! {
    /// Antminer T9 and T9+ (bmminer firmware, chains 2 to 4 and 9 to 14).
    StatsT9 {
        #[serde(rename = "BMMiner")]
        bmminer: String,
        #[serde(rename = "Miner")]
        miner: String,
        #[serde(rename = "CompileTime")]
        compile_time: String,
        #[serde(rename = "Type")]
        miner_type: String,
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "STATS")]
        stats: i64,
        #[serde(rename = "Elapsed")]
        elapsed: i64,
        #[serde(rename = "Calls")]
        calls: i64,
        #[serde(rename = "Wait")]
        wait: f64,
        #[serde(rename = "Max")]
        max: f64,
        #[serde(rename = "Min")]
        min: f64,
        #[serde(rename = "GHS 5s")]
        ghs_5s: f64,
        #[serde(rename = "GHS av")]
        ghs_average: f64,
        miner_count: i32,
        frequency: f64,
        fan_num: i32,
        fan3: i32,
        fan6: i32,
        temp_num: i32,
        temp2: i32,
        temp3: i32,
        temp4: i32,
        temp9: i32,
        temp10: i32,
        temp11: i32,
        temp12: i32,
        temp13: i32,
        temp14: i32,
        temp2_2: i32,
        temp2_3: i32,
        temp2_4: i32,
        temp2_9: i32,
        temp2_10: i32,
        temp2_11: i32,
        temp2_12: i32,
        temp2_13: i32,
        temp2_14: i32,
        temp_max: i32,
        #[serde(rename = "freq_avg2")]
        frequency_avg2: f64,
        #[serde(rename = "freq_avg3")]
        frequency_avg3: f64,
        #[serde(rename = "freq_avg4")]
        frequency_avg4: f64,
        #[serde(rename = "freq_avg5")]
        frequency_avg5: f64,
        #[serde(rename = "freq_avg6")]
        frequency_avg6: f64,
        #[serde(rename = "freq_avg7")]
        frequency_avg7: f64,
        #[serde(rename = "freq_avg8")]
        frequency_avg8: f64,
        #[serde(rename = "freq_avg9")]
        frequency_avg9: f64,
        #[serde(rename = "freq_avg10")]
        frequency_avg10: f64,
        #[serde(rename = "freq_avg11")]
        frequency_avg11: f64,
        #[serde(rename = "freq_avg12")]
        frequency_avg12: f64,
        #[serde(rename = "freq_avg13")]
        frequency_avg13: f64,
        #[serde(rename = "freq_avg14")]
        frequency_avg14: f64,
        #[serde(rename = "total_rateideal")]
        total_rate_ideal: f64,
        #[serde(rename = "total_freqavg")]
        total_frequency_avg: f64,
        total_acn: i32,
        total_rate: f64,
        #[serde(rename = "chain_rateideal2")]
        chain_rate_ideal2: f64,
        #[serde(rename = "chain_rateideal3")]
        chain_rate_ideal3: f64,
        #[serde(rename = "chain_rateideal4")]
        chain_rate_ideal4: f64,
        #[serde(rename = "chain_rateideal9")]
        chain_rate_ideal9: f64,
        #[serde(rename = "chain_rateideal10")]
        chain_rate_ideal10: f64,
        #[serde(rename = "chain_rateideal11")]
        chain_rate_ideal11: f64,
        #[serde(rename = "chain_rateideal12")]
        chain_rate_ideal12: f64,
        #[serde(rename = "chain_rateideal13")]
        chain_rate_ideal13: f64,
        #[serde(rename = "chain_rateideal14")]
        chain_rate_ideal14: f64,
        #[serde(rename = "Device Hardware%")]
        device_hardware_percent: f64,
        no_matching_work: i64,
        chain_acn2: i64,
        chain_acn3: i64,
        chain_acn4: i64,
        chain_acn9: i64,
        chain_acn10: i64,
        chain_acn11: i64,
        chain_acn12: i64,
        chain_acn13: i64,
        chain_acn14: i64,
        chain_acs2: String,
        chain_acs3: String,
        chain_acs4: String,
        chain_acs9: String,
        chain_acs10: String,
        chain_acs11: String,
        chain_acs12: String,
        chain_acs13: String,
        chain_acs14: String,
        chain_hw2: i64,
        chain_hw3: i64,
        chain_hw4: i64,
        chain_hw9: i64,
        chain_hw10: i64,
        chain_hw11: i64,
        chain_hw12: i64,
        chain_hw13: i64,
        chain_hw14: i64,
        chain_rate2: f64,
        chain_rate3: f64,
        chain_rate4: f64,
        chain_rate9: f64,
        chain_rate10: f64,
        chain_rate11: f64,
        chain_rate12: f64,
        chain_rate13: f64,
        chain_rate14: f64,
        chain_xtime2: String,
        chain_xtime3: String,
        chain_xtime4: String,
        chain_xtime9: String,
        chain_xtime10: String,
        chain_xtime11: String,
        chain_xtime12: String,
        chain_xtime13: String,
        chain_xtime14: String,
        #[serde(rename = "chain_offside_2")]
        chain_offside2: i64,
        #[serde(rename = "chain_offside_3")]
        chain_offside3: i64,
        #[serde(rename = "chain_offside_4")]
        chain_offside4: i64,
        #[serde(rename = "chain_offside_9")]
        chain_offside9: i64,
        #[serde(rename = "chain_offside_10")]
        chain_offside10: i64,
        #[serde(rename = "chain_offside_11")]
        chain_offside11: i64,
        #[serde(rename = "chain_offside_12")]
        chain_offside12: i64,
        #[serde(rename = "chain_offside_13")]
        chain_offside13: i64,
        #[serde(rename = "chain_offside_14")]
        chain_offside14: i64,
        #[serde(rename = "chain_opencore_2")]
        chain_open_core2: i64,
        #[serde(rename = "chain_opencore_3")]
        chain_open_core3: i64,
        #[serde(rename = "chain_opencore_4")]
        chain_open_core4: i64,
        #[serde(rename = "chain_opencore_9")]
        chain_open_core9: i64,
        #[serde(rename = "chain_opencore_10")]
        chain_open_core10: i64,
        #[serde(rename = "chain_opencore_11")]
        chain_open_core11: i64,
        #[serde(rename = "chain_opencore_12")]
        chain_open_core12: i64,
        #[serde(rename = "chain_opencore_13")]
        chain_open_core13: i64,
        #[serde(rename = "chain_opencore_14")]
        chain_open_core14: i64,
        miner_id: String,
        miner_version: String,
    }
}

narrowed_stats! {
    /// Antminer D3 (cgminer firmware, chains 1 to 3).
    StatsD3 {
        #[serde(rename = "STATS")]
        stats: i64,
        #[serde(rename = "CGMiner")]
        cgminer: String,
        #[serde(rename = "Miner")]
        miner: String,
        #[serde(rename = "CompileTime")]
        compile_time: String,
        #[serde(rename = "Type")]
        miner_type: String,
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Elapsed")]
        elapsed: i64,
        #[serde(rename = "Calls")]
        calls: i64,
        #[serde(rename = "Wait")]
        wait: f64,
        #[serde(rename = "Min")]
        min: f64,
        #[serde(rename = "Max")]
        max: f64,
        #[serde(rename = "GHS 5s")]
        ghs_5s: f64,
        #[serde(rename = "GHS av")]
        ghs_average: f64,
        miner_count: i32,
        frequency: f64,
        fan_num: i32,
        fan1: i32,
        fan2: i32,
        #[serde(rename = "Device Hardware%")]
        device_hardware_percent: f64,
        no_matching_work: i64,
        temp_num: i32,
        temp1: i32,
        temp2: i32,
        temp3: i32,
        temp4: i32,
        temp2_1: i32,
        temp2_2: i32,
        temp2_3: i32,
        temp_max: i32,
        chain_acn1: i64,
        chain_acn2: i64,
        chain_acn3: i64,
        chain_acs1: String,
        chain_acs2: String,
        chain_acs3: String,
        chain_hw1: i64,
        chain_hw2: i64,
        chain_hw3: i64,
        chain_rate1: f64,
        chain_rate2: f64,
        chain_rate3: f64,
    }
}

narrowed_stats! {
    /// Antminer L3+ (cgminer firmware, chains 1 to 4).
    StatsL3 {
        #[serde(rename = "CGMiner")]
        cgminer: String,
        #[serde(rename = "Miner")]
        miner: String,
        #[serde(rename = "CompileTime")]
        compile_time: String,
        #[serde(rename = "Type")]
        miner_type: String,
        miner_count: i32,
        #[serde(rename = "Elapsed")]
        elapsed: i64,
        #[serde(rename = "Wait")]
        wait: f64,
        #[serde(rename = "Device Hardware%")]
        device_hardware_percent: f64,
        no_matching_work: i64,
        #[serde(rename = "STATS")]
        stats: i64,
        #[serde(rename = "Min")]
        min: f64,
        #[serde(rename = "Max")]
        max: f64,
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Calls")]
        calls: i64,
        frequency: f64,
        fan_num: i32,
        fan1: i32,
        fan2: i32,
        temp_max: i32,
        temp_num: i32,
        temp1: i32,
        temp2: i32,
        temp3: i32,
        temp4: i32,
        temp2_1: i32,
        temp2_2: i32,
        temp2_3: i32,
        temp2_4: i32,
        temp31: i32,
        temp32: i32,
        temp33: i32,
        temp34: i32,
        temp4_1: i32,
        temp4_2: i32,
        temp4_3: i32,
        temp4_4: i32,
        #[serde(rename = "GHS 5s")]
        ghs_5s: f64,
        #[serde(rename = "GHS av")]
        ghs_average: f64,
        chain_hw1: i64,
        chain_hw2: i64,
        chain_hw3: i64,
        chain_hw4: i64,
        chain_acs1: String,
        chain_acs2: String,
        chain_acs3: String,
        chain_acs4: String,
        chain_acn1: i64,
        chain_acn2: i64,
        chain_acn3: i64,
        chain_acn4: i64,
        chain_rate1: f64,
        chain_rate2: f64,
        chain_rate3: f64,
        chain_rate4: f64,
    }
}
