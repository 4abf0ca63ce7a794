use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::loose;

/// Идентификатор записи справочника.
///
/// The backend hands out integer keys but is not consistent about their JSON
/// type: `brandid` comes back as a number, `partyid` sometimes as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        loose::id(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_path_segment() {
        assert_eq!("42".parse::<RecordId>(), Ok(RecordId(42)));
        assert_eq!(" 7 ".parse::<RecordId>(), Ok(RecordId(7)));
        assert!("abc".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let a: RecordId = serde_json::from_str("15").unwrap();
        let b: RecordId = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<RecordId>("null").is_err());
    }
}
