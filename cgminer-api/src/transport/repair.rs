//! Fix for the malformed `stats` response.
//!
//! Antminer firmware answers `stats` with two JSON objects written back to
//! back (`{...}{...}`). Replacing the first `}{` with `,` merges them into one
//! object. Only one substitution is made: the same two characters may appear
//! legitimately further into the payload, inside string values.

use crate::command;

const SEAM: &[u8] = b"}{";

/// True if responses to `command` need [`merge_objects`].
pub fn needs_repair(name: &str) -> bool {
    name == command::STATS
}

/// Replace the first `}{` with `,`. Input without the seam is returned as is.
pub fn merge_objects(mut payload: Vec<u8>) -> Vec<u8> {
    if let Some(pos) = payload.windows(SEAM.len()).position(|w| w == SEAM) {
        payload[pos] = b',';
        payload.remove(pos + 1);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_concatenated_objects() {
        let fixed = merge_objects(br#"{"STATS":0}{"id":1}"#.to_vec());
        assert_eq!(fixed, br#"{"STATS":0,"id":1}"#);

        let value: serde_json::Value = serde_json::from_slice(&fixed).unwrap();
        assert_eq!(value["STATS"], 0);
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn only_first_seam_is_replaced() {
        let fixed = merge_objects(br#"{"a":1}{"b":"}{"}"#.to_vec());
        assert_eq!(fixed, br#"{"a":1,"b":"}{"}"#);
    }

    #[test]
    fn well_formed_payload_is_unchanged() {
        let payload = br#"{"STATUS":[],"id":1}"#.to_vec();
        assert_eq!(merge_objects(payload.clone()), payload);
        assert!(merge_objects(Vec::new()).is_empty());
    }

    #[test]
    fn only_stats_is_repaired() {
        assert!(needs_repair("stats"));
        for name in ["summary", "version", "devs", "pools", "Stats", ""] {
            assert!(!needs_repair(name), "{name}");
        }
    }
}
