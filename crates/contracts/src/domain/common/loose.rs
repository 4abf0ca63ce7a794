//! Tolerant deserializers for backend rows.
//!
//! Rows come straight out of PostgreSQL through node-pg, so NUMERIC and
//! MONEY columns arrive as strings (`"18.00"`, `"$1,250.00"`), integer
//! columns occasionally as strings, and any column may be `null`. These
//! helpers accept all of that instead of failing the whole list.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use super::RecordId;

/// Any scalar as text; `null`/missing become an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_text).unwrap_or_default())
}

/// Integer from a number or a numeric string; `null`, `""` and junk become `None`.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_i64))
}

/// Boolean from `true`/`false`, `1`/`0` or their string forms; `null` is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "t" | "1" | "yes"),
        _ => false,
    })
}

/// Required identifier.
pub fn id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| de::Error::custom(format!("invalid record id: {}", value)))
}

/// Identifier out of an arbitrary JSON value (used for create acks too).
pub fn id_from_value(value: &Value) -> Option<RecordId> {
    value_i64(value).map(RecordId)
}

pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn value_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string")]
        text: String,
        #[serde(default, deserialize_with = "opt_i64")]
        number: Option<i64>,
        #[serde(default, deserialize_with = "flag")]
        flag: bool,
    }

    #[test]
    fn test_scalars_become_text() {
        let row: Row = serde_json::from_str(r#"{"text": 18.5}"#).unwrap();
        assert_eq!(row.text, "18.5");
        let row: Row = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(row.text, "");
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.text, "");
    }

    #[test]
    fn test_numeric_strings() {
        let row: Row = serde_json::from_str(r#"{"number": "12"}"#).unwrap();
        assert_eq!(row.number, Some(12));
        let row: Row = serde_json::from_str(r#"{"number": ""}"#).unwrap();
        assert_eq!(row.number, None);
        let row: Row = serde_json::from_str(r#"{"number": 3}"#).unwrap();
        assert_eq!(row.number, Some(3));
    }

    #[test]
    fn test_flags() {
        let row: Row = serde_json::from_str(r#"{"flag": "true"}"#).unwrap();
        assert!(row.flag);
        let row: Row = serde_json::from_str(r#"{"flag": 0}"#).unwrap();
        assert!(!row.flag);
        let row: Row = serde_json::from_str(r#"{"flag": null}"#).unwrap();
        assert!(!row.flag);
    }
}
