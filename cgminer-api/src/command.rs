//! Request encoding.
//!
//! A request is a single JSON object, `{"command": ..., "parameter": ...}`,
//! written to the socket with no terminator. Firmware treats a missing
//! `parameter` differently from an empty one, so an empty parameter is
//! dropped rather than sent as `""`.

use serde::Serialize;

use crate::error::{Error, Result};

pub const VERSION: &str = "version";
pub const SUMMARY: &str = "summary";
pub const STATS: &str = "stats";
pub const DEVS: &str = "devs";
pub const DEVDETAILS: &str = "devdetails";
pub const POOLS: &str = "pools";
pub const ADDPOOL: &str = "addpool";
pub const ENABLEPOOL: &str = "enablepool";
pub const DISABLEPOOL: &str = "disablepool";
pub const REMOVEPOOL: &str = "removepool";
pub const SWITCHPOOL: &str = "switchpool";
pub const RESTART: &str = "restart";
pub const QUIT: &str = "quit";

/// One API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    #[serde(rename = "command")]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<String>,
}

impl Command {
    /// Create a command that takes no parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: None,
        }
    }

    /// Create a command with a parameter. An empty parameter is omitted.
    ///
    /// Commands that take several values expect them comma separated.
    /// Commas inside a value are not escaped, so such values cannot be
    /// represented.
    pub fn with_parameter(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        Self {
            name: name.into(),
            parameter: (!parameter.is_empty()).then_some(parameter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Serialize to wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.name.is_empty() {
            return Err(Error::InvalidCommand("command name is empty".to_string()));
        }
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_parameter() {
        let bytes = Command::new(SUMMARY).encode().unwrap();
        assert_eq!(bytes, br#"{"command":"summary"}"#);
    }

    #[test]
    fn empty_parameter_is_omitted() {
        let cmd = Command::with_parameter(RESTART, "");
        assert_eq!(cmd.parameter(), None);
        assert_eq!(cmd.encode().unwrap(), br#"{"command":"restart"}"#);
    }

    #[test]
    fn with_parameter() {
        let cmd = Command::with_parameter(ENABLEPOOL, "2");
        assert_eq!(
            cmd.encode().unwrap(),
            br#"{"command":"enablepool","parameter":"2"}"#
        );
    }

    #[test]
    fn commas_pass_through() {
        let cmd = Command::with_parameter(ADDPOOL, "stratum+tcp://pool:3333,worker,x,y");
        assert_eq!(
            cmd.encode().unwrap(),
            br#"{"command":"addpool","parameter":"stratum+tcp://pool:3333,worker,x,y"}"#
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Command::new("").encode(),
            Err(Error::InvalidCommand(_))
        ));
    }
}
