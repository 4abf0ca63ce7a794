//! Working copy of a record's editable fields.

use std::collections::BTreeMap;
use thiserror::Error;

/// Field key → text, keyed by the form's PascalCase names (`BrandName`).
///
/// Every input is held as text exactly as typed; conversion to typed
/// payload fields happens once, when a save is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<&'static str, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by the per-entity adapters.
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, `None` when blank.
    pub fn non_empty(&self, field: &str) -> Option<String> {
        let v = self.get(field).trim();
        (!v.is_empty()).then(|| v.to_string())
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn flag(&self, field: &str) -> bool {
        self.get(field) == "true"
    }

    pub fn set_flag(&mut self, field: &'static str, on: bool) {
        self.set(field, if on { "true" } else { "false" });
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

/// Strip currency symbols and thousands separators: `"$1,250.00"` → `"1250.00"`.
pub fn clean_money(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Text in a numeric field that is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a number: {0:?}")]
pub struct InvalidNumber(pub String);

/// Parse a numeric form field; blank is `Ok(None)`.
///
/// `NaN` and the infinities parse as `f64` but serialize to `null`, so
/// they are rejected with everything else that is not a plain number.
pub fn parse_number(raw: &str) -> Result<Option<f64>, InvalidNumber> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_as_empty() {
        let form = FormValues::new().with("BrandName", "  Bosch ");
        assert_eq!(form.get("BrandName"), "  Bosch ");
        assert_eq!(form.non_empty("BrandName").as_deref(), Some("Bosch"));
        assert_eq!(form.get("Nope"), "");
        assert_eq!(form.non_empty("Nope"), None);
    }

    #[test]
    fn test_clean_money() {
        assert_eq!(clean_money("$1,250.00"), "1250.00");
        assert_eq!(clean_money("₹ 99"), "99");
        assert_eq!(clean_money(""), "");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 9 "), Ok(Some(9.0)));
        assert_eq!(parse_number(""), Ok(None));
        assert_eq!(parse_number("nine"), Err(InvalidNumber("nine".to_string())));
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for raw in ["NaN", "nan", "inf", "-Infinity"] {
            assert!(parse_number(raw).is_err(), "{raw} accepted");
        }
    }
}
