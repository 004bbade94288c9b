//! Numbers with an inconsistent wire encoding.
//!
//! Miner firmware is sloppy about numeric fields. Depending on the hardware
//! model, the same field may arrive as a bare number (`13630.55`), as a
//! quoted number (`"13630.55"`), as an empty string, or as `null`. A plain
//! `f64` rejects most of these, so fields known to wander between encodings
//! use [`Number`] instead.
//!
//! ```
//! use cgminer_api::Number;
//!
//! assert_eq!(Number::parse_token(r#""637""#).unwrap().as_f64(), 637.0);
//! assert_eq!(Number::parse_token("637").unwrap().as_i64(), 637);
//! assert!(!Number::parse_token(r#""""#).unwrap().is_present());
//! assert!(Number::parse_token("[1,2]").is_err());
//! ```

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Numeric value decoded from any of the encodings firmware uses.
///
/// `Absent` covers a missing field, `null`, and the empty string. It reads as
/// zero through the accessors; use [`Number::is_present`] when the
/// difference matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Number {
    #[default]
    Absent,
    Value(f64),
}

/// Token that does not follow the numeric grammar.
#[derive(Error, Debug)]
pub enum NumberError {
    #[error("value is not a number: {0}")]
    NotNumeric(String),

    #[error("invalid number {token}: {source}")]
    Invalid {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid quoted number {token}: {source}")]
    Unquote {
        token: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Number {
    /// Parse one raw JSON token.
    ///
    /// Rules, in order: empty input, `""` and `null` are absent; a quoted
    /// string is unquoted and parsed as `f64`; objects and arrays are
    /// rejected; anything else is parsed as a bare number.
    pub fn parse_token(token: &str) -> Result<Self, NumberError> {
        let token = token.trim();
        match token {
            "" | "\"\"" | "null" => return Ok(Number::Absent),
            _ => {}
        }

        let text = match token.as_bytes()[0] {
            b'"' => serde_json::from_str::<String>(token).map_err(|source| NumberError::Unquote {
                token: token.to_string(),
                source,
            })?,
            b'{' | b'[' => return Err(NumberError::NotNumeric(token.to_string())),
            _ => token.to_string(),
        };

        Self::parse_text(&text).map_err(|source| NumberError::Invalid {
            token: token.to_string(),
            source,
        })
    }

    /// Parse the contents of a quoted number. Blank text is absent.
    fn parse_text(text: &str) -> Result<Self, std::num::ParseFloatError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Number::Absent);
        }
        text.parse::<f64>().map(Number::Value)
    }

    /// True unless the value was missing, `null` or empty.
    pub fn is_present(&self) -> bool {
        matches!(self, Number::Value(_))
    }

    /// Get value as `f64`, zero when absent.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Absent => 0.0,
            Number::Value(v) => v,
        }
    }

    /// Get value rounded to the nearest integer, zero when absent.
    pub fn as_i64(&self) -> i64 {
        self.as_f64().round() as i64
    }

    /// Same as [`Number::as_i64`], saturating at the `i32` range.
    pub fn as_i32(&self) -> i32 {
        self.as_f64().round() as i32
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Value(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.as_f64()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a quoted number, an empty string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
        Ok(Number::Value(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
        Ok(Number::Value(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
        Ok(Number::Value(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
        Number::parse_text(v).map_err(|source| {
            E::custom(NumberError::Invalid {
                token: format!("{v:?}"),
                source,
            })
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Number, E> {
        Ok(Number::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Number, E> {
        Ok(Number::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Number, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Number, A::Error> {
        Err(de::Error::custom(NumberError::NotNumeric("object".to_string())))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Number, A::Error> {
        Err(de::Error::custom(NumberError::NotNumeric("array".to_string())))
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Absent => serializer.serialize_none(),
            Number::Value(v) => serializer.serialize_f64(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Record {
        #[serde(rename = "GHS 5s")]
        ghs_5s: Number,
    }

    #[test]
    fn encodings_agree() {
        for token in ["32", "\"32\"", " 32 ", "32.0", "\"3.2e1\""] {
            let n = Number::parse_token(token).unwrap();
            assert_eq!(n, Number::Value(32.0), "token {token}");
        }
    }

    #[test]
    fn empty_forms_are_absent() {
        for token in ["", "\"\"", "null"] {
            let n = Number::parse_token(token).unwrap();
            assert_eq!(n, Number::Absent, "token {token:?}");
            assert_eq!(n.as_f64(), 0.0);
            assert_eq!(n.as_i64(), 0);
        }
    }

    #[test]
    fn containers_are_rejected() {
        for token in [r#"{"fff": 32}"#, "[1,2,3]"] {
            let err = Number::parse_token(token).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("value is not a number"), "{msg}");
            assert!(msg.contains(token), "{msg}");
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Number::parse_token("\"abc\""),
            Err(NumberError::Invalid { .. })
        ));
        assert!(Number::parse_token("true").is_err());
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(Number::Value(2.5).as_i64(), 3);
        assert_eq!(Number::Value(2.49).as_i64(), 2);
        assert_eq!(Number::Value(-1.6).as_i32(), -2);
    }

    #[test]
    fn decodes_inside_struct() {
        let r: Record = serde_json::from_str(r#"{"GHS 5s":"13630.55"}"#).unwrap();
        assert_eq!(r.ghs_5s.as_f64(), 13630.55);

        let r: Record = serde_json::from_str(r#"{"GHS 5s":13630.55}"#).unwrap();
        assert_eq!(r.ghs_5s.as_f64(), 13630.55);

        let r: Record = serde_json::from_str(r#"{"GHS 5s":""}"#).unwrap();
        assert!(!r.ghs_5s.is_present());

        let r: Record = serde_json::from_str(r#"{"GHS 5s":null}"#).unwrap();
        assert!(!r.ghs_5s.is_present());

        let r: Record = serde_json::from_str("{}").unwrap();
        assert!(!r.ghs_5s.is_present());
    }

    #[test]
    fn container_inside_struct_names_token() {
        let err = serde_json::from_str::<Record>(r#"{"GHS 5s":[1]}"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("value is not a number: array"));

        let err = serde_json::from_str::<Record>(r#"{"GHS 5s":{"fff":32}}"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("value is not a number: object"));

        let err = serde_json::from_str::<Record>(r#"{"GHS 5s":"abc"}"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("\"abc\""), "{err}");
    }

    #[test]
    fn decodes_from_reader() {
        let r: Record = serde_json::from_reader(&br#"{"GHS 5s":"1.5"}"#[..]).unwrap();
        assert_eq!(r.ghs_5s, Number::Value(1.5));

        let r: Record = serde_json::from_reader(&br#"{"GHS 5s":15}"#[..]).unwrap();
        assert_eq!(r.ghs_5s, Number::Value(15.0));

        let r: Record = serde_json::from_reader(&br#"{"GHS 5s":""}"#[..]).unwrap();
        assert_eq!(r.ghs_5s, Number::Absent);
    }

    #[test]
    fn decodes_from_value() {
        for (value, expected) in [
            (serde_json::json!({"GHS 5s": 1.5}), Number::Value(1.5)),
            (serde_json::json!({"GHS 5s": "1.5"}), Number::Value(1.5)),
            (serde_json::json!({"GHS 5s": -3}), Number::Value(-3.0)),
            (serde_json::json!({"GHS 5s": ""}), Number::Absent),
            (serde_json::json!({"GHS 5s": null}), Number::Absent),
        ] {
            let r: Record = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(r.ghs_5s, expected, "{value}");
        }
        assert!(serde_json::from_value::<Record>(serde_json::json!({"GHS 5s": [1]})).is_err());
    }

    #[test]
    fn round_trips_through_value() {
        let r: Record = serde_json::from_str(r#"{"GHS 5s":"13630.55"}"#).unwrap();
        let value = serde_json::json!({ "GHS 5s": r.ghs_5s });
        let back: Record = serde_json::from_value(value).unwrap();
        assert_eq!(back.ghs_5s, Number::Value(13630.55));
    }

    #[test]
    fn serializes_presence() {
        assert_eq!(serde_json::to_string(&Number::Value(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Number::Absent).unwrap(), "null");
    }
}
