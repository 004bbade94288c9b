//! Stats records.
//!
//! The `stats` command returns the widest and least consistent payload of the
//! API. Every Antminer model reports its own subset of fields, with board
//! slots numbered differently per model (an S9 populates chains 6 to 8, an L3+
//! chains 1 to 4) and some numeric fields quoted on one model and bare on the
//! next. [`GenericStats`] holds the union of all of them so decoding never
//! depends on the model. When the caller knows what hardware it is talking
//! to, [`GenericStats::narrow`] projects onto one of the model shapes in
//! [`models`].

pub mod models;

use serde::{Deserialize, Serialize};

use crate::types::Number;

pub use models::{Project, StatsD3, StatsL3, StatsS7, StatsS9, StatsT9};

/// Union of the stats fields reported by all supported models.
///
/// Fields a device does not send are left at their default.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GenericStats {
    #[serde(rename = "BMMiner")]
    pub bmminer: String,
    #[serde(rename = "API")]
    pub api: String,
    #[serde(rename = "CGMiner")]
    pub cgminer: String,
    #[serde(rename = "Miner")]
    pub miner: String,
    #[serde(rename = "CompileTime")]
    pub compile_time: String,
    #[serde(rename = "Type")]
    pub miner_type: String,
    pub miner_id: String,
    pub miner_version: String,
    pub miner_count: i32,
    #[serde(rename = "Elapsed")]
    pub elapsed: i64,
    #[serde(rename = "Wait")]
    pub wait: f64,
    #[serde(rename = "Device Hardware%")]
    pub device_hardware_percent: f64,
    #[serde(rename = "STATS")]
    pub stats: i64,
    #[serde(rename = "Max")]
    pub max: f64,
    pub no_matching_work: i64,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Calls")]
    pub calls: i64,
    #[serde(rename = "Min")]
    pub min: f64,

    // Board totals
    pub total_acn: i32,
    pub total_rate: f64,
    #[serde(rename = "total_rateideal")]
    pub total_rate_ideal: f64,
    #[serde(rename = "total_freqavg")]
    pub total_frequency_avg: f64,
    pub frequency: Number,
    #[serde(rename = "freq_avg1")]
    pub frequency_avg1: f64,
    #[serde(rename = "freq_avg2")]
    pub frequency_avg2: f64,
    #[serde(rename = "freq_avg3")]
    pub frequency_avg3: f64,
    #[serde(rename = "freq_avg4")]
    pub frequency_avg4: f64,
    #[serde(rename = "freq_avg5")]
    pub frequency_avg5: f64,
    #[serde(rename = "freq_avg6")]
    pub frequency_avg6: f64,
    #[serde(rename = "freq_avg7")]
    pub frequency_avg7: f64,
    #[serde(rename = "freq_avg8")]
    pub frequency_avg8: f64,
    #[serde(rename = "freq_avg9")]
    pub frequency_avg9: f64,
    #[serde(rename = "freq_avg10")]
    pub frequency_avg10: f64,
    #[serde(rename = "freq_avg11")]
    pub frequency_avg11: f64,
    #[serde(rename = "freq_avg12")]
    pub frequency_avg12: f64,
    #[serde(rename = "freq_avg13")]
    pub frequency_avg13: f64,
    #[serde(rename = "freq_avg14")]
    pub frequency_avg14: f64,
    #[serde(rename = "freq_avg15")]
    pub frequency_avg15: f64,
    #[serde(rename = "freq_avg16")]
    pub frequency_avg16: f64,

    // Fans and temperature sensors
    pub fan_num: i32,
    pub fan1: i32,
    pub fan2: i32,
    pub fan3: i32,
    pub fan4: i32,
    pub fan5: i32,
    pub fan6: i32,
    pub fan7: i32,
    pub fan8: i32,
    pub temp_max: i32,
    pub temp_num: i32,
    pub temp1: i32,
    pub temp2: i32,
    pub temp3: i32,
    pub temp4: i32,
    pub temp5: i32,
    pub temp6: i32,
    pub temp7: i32,
    pub temp8: i32,
    pub temp9: i32,
    pub temp10: i32,
    pub temp11: i32,
    pub temp12: i32,
    pub temp13: i32,
    pub temp14: i32,
    pub temp15: i32,
    pub temp16: i32,
    pub temp2_1: i32,
    pub temp2_2: i32,
    pub temp2_3: i32,
    pub temp2_4: i32,
    pub temp2_5: i32,
    pub temp2_6: i32,
    pub temp2_7: i32,
    pub temp2_8: i32,
    pub temp2_9: i32,
    pub temp2_10: i32,
    pub temp2_11: i32,
    pub temp2_12: i32,
    pub temp2_13: i32,
    pub temp2_14: i32,
    pub temp2_15: i32,
    pub temp2_16: i32,
    pub temp3_1: i32,
    pub temp3_2: i32,
    pub temp3_3: i32,
    pub temp3_4: i32,
    pub temp3_5: i32,
    pub temp3_6: i32,
    pub temp3_7: i32,
    pub temp3_8: i32,
    pub temp3_9: i32,
    pub temp3_10: i32,
    pub temp3_11: i32,
    pub temp3_12: i32,
    pub temp3_13: i32,
    pub temp3_14: i32,
    pub temp3_15: i32,
    pub temp3_16: i32,
    // L3+ reports its third sensor bank without the underscore
    pub temp31: i32,
    pub temp32: i32,
    pub temp33: i32,
    pub temp34: i32,
    pub temp4_1: i32,
    pub temp4_2: i32,
    pub temp4_3: i32,
    pub temp4_4: i32,

    // Hashrate. S7 sends `GHS 5s` bare, every other model quotes it.
    #[serde(rename = "GHS 5s")]
    pub ghs_5s: Number,
    #[serde(rename = "GHS av")]
    pub ghs_average: f64,

    // Per-chain counters, indexed by board slot
    pub chain_hw1: i64,
    pub chain_hw2: i64,
    pub chain_hw3: i64,
    pub chain_hw4: i64,
    pub chain_hw5: i64,
    pub chain_hw6: i64,
    pub chain_hw7: i64,
    pub chain_hw8: i64,
    pub chain_hw9: i64,
    pub chain_hw10: i64,
    pub chain_hw11: i64,
    pub chain_hw12: i64,
    pub chain_hw13: i64,
    pub chain_hw14: i64,
    pub chain_hw15: i64,
    pub chain_hw16: i64,
    pub chain_acs1: String,
    pub chain_acs2: String,
    pub chain_acs3: String,
    pub chain_acs4: String,
    pub chain_acs5: String,
    pub chain_acs6: String,
    pub chain_acs7: String,
    pub chain_acs8: String,
    pub chain_acs9: String,
    pub chain_acs10: String,
    pub chain_acs11: String,
    pub chain_acs12: String,
    pub chain_acs13: String,
    pub chain_acs14: String,
    pub chain_acs15: String,
    pub chain_acs16: String,
    pub chain_acn1: i64,
    pub chain_acn2: i64,
    pub chain_acn3: i64,
    pub chain_acn4: i64,
    pub chain_acn5: i64,
    pub chain_acn6: i64,
    pub chain_acn7: i64,
    pub chain_acn8: i64,
    pub chain_acn9: i64,
    pub chain_acn10: i64,
    pub chain_acn11: i64,
    pub chain_acn12: i64,
    pub chain_acn13: i64,
    pub chain_acn14: i64,
    pub chain_acn15: i64,
    pub chain_acn16: i64,
    // Empty string on slots with no board
    pub chain_rate1: Number,
    pub chain_rate2: Number,
    pub chain_rate3: Number,
    pub chain_rate4: Number,
    pub chain_rate5: Number,
    pub chain_rate6: Number,
    pub chain_rate7: Number,
    pub chain_rate8: Number,
    pub chain_rate9: Number,
    pub chain_rate10: Number,
    pub chain_rate11: Number,
    pub chain_rate12: Number,
    pub chain_rate13: Number,
    pub chain_rate14: Number,
    pub chain_rate15: Number,
    pub chain_rate16: Number,
    #[serde(rename = "chain_rateideal1")]
    pub chain_rate_ideal1: f64,
    #[serde(rename = "chain_rateideal2")]
    pub chain_rate_ideal2: f64,
    #[serde(rename = "chain_rateideal3")]
    pub chain_rate_ideal3: f64,
    #[serde(rename = "chain_rateideal4")]
    pub chain_rate_ideal4: f64,
    #[serde(rename = "chain_rateideal5")]
    pub chain_rate_ideal5: f64,
    #[serde(rename = "chain_rateideal6")]
    pub chain_rate_ideal6: f64,
    #[serde(rename = "chain_rateideal7")]
    pub chain_rate_ideal7: f64,
    #[serde(rename = "chain_rateideal8")]
    pub chain_rate_ideal8: f64,
    #[serde(rename = "chain_rateideal9")]
    pub chain_rate_ideal9: f64,
    #[serde(rename = "chain_rateideal10")]
    pub chain_rate_ideal10: f64,
    #[serde(rename = "chain_rateideal11")]
    pub chain_rate_ideal11: f64,
    #[serde(rename = "chain_rateideal12")]
    pub chain_rate_ideal12: f64,
    #[serde(rename = "chain_rateideal13")]
    pub chain_rate_ideal13: f64,
    #[serde(rename = "chain_rateideal14")]
    pub chain_rate_ideal14: f64,
    #[serde(rename = "chain_rateideal15")]
    pub chain_rate_ideal15: f64,
    #[serde(rename = "chain_rateideal16")]
    pub chain_rate_ideal16: f64,
    #[serde(rename = "chain_opencore_1")]
    pub chain_open_core1: Number,
    #[serde(rename = "chain_opencore_2")]
    pub chain_open_core2: Number,
    #[serde(rename = "chain_opencore_3")]
    pub chain_open_core3: Number,
    #[serde(rename = "chain_opencore_4")]
    pub chain_open_core4: Number,
    #[serde(rename = "chain_opencore_5")]
    pub chain_open_core5: Number,
    #[serde(rename = "chain_opencore_6")]
    pub chain_open_core6: Number,
    #[serde(rename = "chain_opencore_7")]
    pub chain_open_core7: Number,
    #[serde(rename = "chain_opencore_8")]
    pub chain_open_core8: Number,
    #[serde(rename = "chain_opencore_9")]
    pub chain_open_core9: Number,
    #[serde(rename = "chain_opencore_10")]
    pub chain_open_core10: Number,
    #[serde(rename = "chain_opencore_11")]
    pub chain_open_core11: Number,
    #[serde(rename = "chain_opencore_12")]
    pub chain_open_core12: Number,
    #[serde(rename = "chain_opencore_13")]
    pub chain_open_core13: Number,
    #[serde(rename = "chain_opencore_14")]
    pub chain_open_core14: Number,
    #[serde(rename = "chain_opencore_15")]
    pub chain_open_core15: Number,
    #[serde(rename = "chain_opencore_16")]
    pub chain_open_core16: Number,
    #[serde(rename = "chain_offside_1")]
    pub chain_offside1: Number,
    #[serde(rename = "chain_offside_2")]
    pub chain_offside2: Number,
    #[serde(rename = "chain_offside_3")]
    pub chain_offside3: Number,
    #[serde(rename = "chain_offside_4")]
    pub chain_offside4: Number,
    #[serde(rename = "chain_offside_5")]
    pub chain_offside5: Number,
    #[serde(rename = "chain_offside_6")]
    pub chain_offside6: Number,
    #[serde(rename = "chain_offside_7")]
    pub chain_offside7: Number,
    #[serde(rename = "chain_offside_8")]
    pub chain_offside8: Number,
    #[serde(rename = "chain_offside_9")]
    pub chain_offside9: Number,
    #[serde(rename = "chain_offside_10")]
    pub chain_offside10: Number,
    #[serde(rename = "chain_offside_11")]
    pub chain_offside11: Number,
    #[serde(rename = "chain_offside_12")]
    pub chain_offside12: Number,
    #[serde(rename = "chain_offside_13")]
    pub chain_offside13: Number,
    #[serde(rename = "chain_offside_14")]
    pub chain_offside14: Number,
    #[serde(rename = "chain_offside_15")]
    pub chain_offside15: Number,
    #[serde(rename = "chain_offside_16")]
    pub chain_offside16: Number,
    pub chain_xtime1: String,
    pub chain_xtime2: String,
    pub chain_xtime3: String,
    pub chain_xtime4: String,
    pub chain_xtime5: String,
    pub chain_xtime6: String,
    pub chain_xtime7: String,
    pub chain_xtime8: String,
    pub chain_xtime9: String,
    pub chain_xtime10: String,
    pub chain_xtime11: String,
    pub chain_xtime12: String,
    pub chain_xtime13: String,
    pub chain_xtime14: String,
    pub chain_xtime15: String,
    pub chain_xtime16: String,

    // S7 only
    pub baud: i64,
    pub asic_count: i64,
    pub timeout: i64,
    pub voltage: Number,
    #[serde(rename = "USB Pipe")]
    pub usb_pipe: Number,
    pub hwv1: i64,
    pub hwv2: i64,
    pub hwv3: i64,
    pub hwv4: i64,
    pub temp_avg: i32,
}

impl GenericStats {
    /// Project onto a model shape.
    ///
    /// Keeps the fields the model defines and drops the rest. Never fails:
    /// a field this device did not report is zero in the result.
    pub fn narrow<'a, M>(&'a self) -> M
    where
        M: From<&'a GenericStats>,
    {
        M::from(self)
    }

    /// Fields reported by the Antminer S7.
    pub fn s7(&self) -> StatsS7 {
        self.narrow()
    }

    /// Fields reported by the Antminer S9.
    pub fn s9(&self) -> StatsS9 {
        self.narrow()
    }

    /// Fields reported by the Antminer T9 and T9+.
    pub fn t9(&self) -> StatsT9 {
        self.narrow()
    }

    /// Fields reported by the Antminer D3.
    pub fn d3(&self) -> StatsD3 {
        self.narrow()
    }

    /// Fields reported by the Antminer L3+.
    pub fn l3(&self) -> StatsL3 {
        self.narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{StatsResponse, exactly_one};
    use crate::transport::repair::merge_objects;

    fn decode(fixture: &str) -> GenericStats {
        let payload = merge_objects(fixture.as_bytes().to_vec());
        let response: StatsResponse = serde_json::from_slice(&payload).unwrap();
        exactly_one(response.stats, "STATS").unwrap()
    }

    const ACS_S9: &str = " oooooooo oooooooo oooooooo oooooooo oooooooo oooooooo oooooooo ooooooo";

    #[test]
    fn s9_generic_record() {
        let stats = decode(include_str!("../../testdata/stats_s9.json"));

        // Version header and counters land in the same record after repair.
        assert_eq!(stats.bmminer, "2.0.0");
        assert_eq!(stats.miner_type, "Antminer S9");
        assert_eq!(stats.id, "BC50");
        assert_eq!(stats.elapsed, 100986);

        assert_eq!(stats.ghs_5s, Number::Value(13630.55));
        assert_eq!(stats.frequency, Number::Value(637.0));
        assert_eq!(stats.chain_rate1, Number::Absent);
        assert_eq!(stats.chain_rate6, Number::Value(4536.24));
        assert_eq!(stats.chain_open_core8, Number::Value(1.0));
        assert_eq!(stats.frequency_avg7, 627.76);
        assert!(stats.cgminer.is_empty());
    }

    #[test]
    fn s9_narrowing() {
        let stats = decode(include_str!("../../testdata/stats_s9.json")).s9();

        assert_eq!(stats.bmminer, "2.0.0");
        assert_eq!(stats.miner, "16.8.1.3");
        assert_eq!(stats.compile_time, "Fri Nov 17 17:57:49 CST 2017");
        assert_eq!(stats.stats, 0);
        assert_eq!(stats.min, 99999999.0);
        assert_eq!(stats.ghs_5s, 13630.55);
        assert_eq!(stats.ghs_average, 13569.28);
        assert_eq!(stats.miner_count, 3);
        assert_eq!(stats.frequency, 637.0);
        assert_eq!((stats.fan3, stats.fan6), (4080, 4080));
        assert_eq!((stats.temp6, stats.temp7, stats.temp8), (56, 52, 56));
        assert_eq!((stats.temp2_6, stats.temp2_7, stats.temp2_8), (71, 67, 71));
        assert_eq!(stats.total_rate_ideal, 13501.38);
        assert_eq!(stats.total_frequency_avg, 627.47);
        assert_eq!(stats.total_acn, 189);
        assert_eq!(stats.total_rate, 13630.54);
        assert_eq!(stats.chain_rate_ideal8, 4500.66);
        assert_eq!(stats.device_hardware_percent, 0.0004);
        assert_eq!(stats.no_matching_work, 1222);
        assert_eq!(stats.chain_acs6, ACS_S9);
        assert_eq!((stats.chain_hw6, stats.chain_hw7, stats.chain_hw8), (1184, 22, 15));
        assert_eq!(stats.chain_rate7, 4545.53);
        assert_eq!(stats.chain_xtime6, "{X49=5}");
        assert_eq!(stats.chain_offside6, 0);
        assert_eq!(stats.chain_open_core8, 1);
        assert_eq!(stats.miner_version, "16.8.1.3");
        assert_eq!(stats.miner_id, "80749dc610358854");
    }

    #[test]
    fn l3_narrowing() {
        let stats = decode(include_str!("../../testdata/stats_l3plus.json")).l3();

        assert_eq!(stats.cgminer, "4.9.0");
        assert_eq!(stats.miner_type, "Antminer L3+");
        assert_eq!(stats.id, "L30");
        assert_eq!(stats.ghs_5s, 580.455);
        assert_eq!(stats.frequency, 444.0);
        assert_eq!((stats.fan1, stats.fan2), (5250, 4260));
        assert_eq!((stats.temp1, stats.temp4), (40, 36));
        assert_eq!(stats.temp2_4, 45);
        assert_eq!(stats.temp31, 0);
        assert_eq!(stats.chain_hw4, 6354);
        assert_eq!(stats.chain_rate3, 145.10);
        assert_eq!(stats.no_matching_work, 6483);
    }

    #[test]
    fn l3_third_sensor_bank_without_underscore() {
        let stats: GenericStats =
            serde_json::from_str(r#"{"temp31":51,"temp34":49,"temp3_1":7}"#).unwrap();
        let l3 = stats.l3();
        assert_eq!((l3.temp31, l3.temp34), (51, 49));
        assert_eq!(stats.temp3_1, 7);
    }

    #[test]
    fn d3_narrowing() {
        let stats = decode(include_str!("../../testdata/stats_d3.json")).d3();

        assert_eq!(stats.cgminer, "4.9.0");
        assert_eq!(stats.miner, "1.0.0.6");
        assert_eq!(stats.ghs_5s, 17052.3);
        assert_eq!(stats.ghs_average, 17541.89);
        assert_eq!(stats.frequency, 487.0);
        assert_eq!((stats.temp2_1, stats.temp2_2, stats.temp2_3), (75, 79, 80));
        assert_eq!(stats.device_hardware_percent, 0.0001);
        assert_eq!(stats.chain_rate3, 5626.71);
    }

    #[test]
    fn s7_narrowing() {
        let stats = decode(include_str!("../../testdata/stats_s7.json")).s7();

        assert_eq!(stats.cgminer, "4.8.0");
        assert_eq!(stats.id, "BTM0");
        // S7 sends the hashrate bare.
        assert_eq!(stats.ghs_5s, 4697.23);
        assert_eq!(stats.baud, 115200);
        assert_eq!(stats.asic_count, 8);
        assert_eq!(stats.timeout, 5);
        assert_eq!(stats.frequency, 700.0);
        assert_eq!(stats.voltage, 0.706);
        assert_eq!((stats.hwv1, stats.hwv2, stats.hwv3, stats.hwv4), (3, 5, 3, 0));
        assert_eq!(stats.fan_num, 6);
        assert_eq!(stats.temp_avg, 56);
        assert_eq!(stats.usb_pipe, 0);
    }

    #[test]
    fn missing_fields_are_zero() {
        let t9 = decode(include_str!("../../testdata/stats_l3plus.json")).t9();

        assert!(t9.bmminer.is_empty());
        assert_eq!(t9.ghs_5s, 580.455);
        assert_eq!(t9.chain_open_core14, 0);
        assert_eq!(t9.temp2_14, 0);
    }

    #[test]
    fn decodes_from_value_and_reader() {
        let value = serde_json::json!({"GHS 5s": "13630.55", "frequency": 637, "chain_rate1": ""});
        let stats: GenericStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.ghs_5s, Number::Value(13630.55));
        assert_eq!(stats.frequency, Number::Value(637.0));
        assert_eq!(stats.chain_rate1, Number::Absent);

        let round_trip: GenericStats =
            serde_json::from_value(serde_json::to_value(&stats).unwrap()).unwrap();
        assert_eq!(round_trip, stats);

        let fixture = merge_objects(include_bytes!("../../testdata/stats_s9.json").to_vec());
        let response: StatsResponse = serde_json::from_reader(fixture.as_slice()).unwrap();
        let s9 = exactly_one(response.stats, "STATS").unwrap().s9();
        assert_eq!(s9.ghs_5s, 13630.55);
    }

    #[test]
    fn narrowing_is_deterministic() {
        let stats = decode(include_str!("../../testdata/stats_s9.json"));
        assert_eq!(stats.s9(), stats.s9());
        assert_eq!(stats.narrow::<StatsS9>(), stats.s9());
        assert_eq!(stats.l3(), stats.l3());
    }

    #[test]
    fn narrowed_shape_serializes_plain_numbers() {
        let stats = decode(include_str!("../../testdata/stats_s9.json")).s9();
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["GHS 5s"], 13630.55);
        assert_eq!(value["chain_opencore_8"], 1);
        assert_eq!(value["Type"], "Antminer S9");
    }
}
