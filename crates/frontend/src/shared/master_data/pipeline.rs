//! records + view settings → the one ordered view that the table, the
//! paginator and the record navigator all consume.

use contracts::domain::common::{MasterRecord, SortKind};
use std::cmp::Ordering;

use super::view::{SearchScope, SortDirection, ViewState};

/// Lower-cased whitespace-separated terms; empty input gives no terms.
pub fn search_terms(term: &str) -> Vec<String> {
    term.split_whitespace().map(str::to_lowercase).collect()
}

/// A field matches when its text contains every term.
pub fn matches<R: MasterRecord>(record: &R, terms: &[String], scope: SearchScope) -> bool {
    if terms.is_empty() {
        return true;
    }
    let field_matches = |field: &str| {
        record
            .field_text(field)
            .map(|text| {
                let text = text.to_lowercase();
                terms.iter().all(|t| text.contains(t.as_str()))
            })
            .unwrap_or(false)
    };
    match scope {
        SearchScope::AllFields => R::search_fields().iter().any(|f| field_matches(f)),
        SearchScope::Field(field) => field_matches(field),
    }
}

/// Numeric sort key: plain parse first, then digits and `.` extracted
/// (`"$1,250.00"`, `"IT-0042"`). Only a leading `-` makes the key
/// negative. Anything else, `NaN` included, sorts as 0.
pub fn numeric_value(text: &str) -> f64 {
    let trimmed = text.trim();
    let value = match trimmed.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            let digits: String = trimmed
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let magnitude = digits.parse::<f64>().unwrap_or(0.0);
            if trimmed.starts_with('-') {
                -magnitude
            } else {
                magnitude
            }
        }
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn compare_by<R: MasterRecord>(a: &R, b: &R, field: &str) -> Ordering {
    let text_a = a.field_text(field).unwrap_or_default();
    let text_b = b.field_text(field).unwrap_or_default();
    match R::sort_kind(field) {
        SortKind::Numeric => numeric_value(&text_a).total_cmp(&numeric_value(&text_b)),
        SortKind::Text => text_a.to_lowercase().cmp(&text_b.to_lowercase()),
    }
}

/// Filter by `scope` and the search term, then stable-sort.
///
/// Without a sort field the fetch order is kept.
pub fn apply<R: MasterRecord>(records: &[R], view: &ViewState, scope: fn(&R) -> bool) -> Vec<R> {
    let terms = search_terms(&view.search_term);
    let mut out: Vec<R> = records
        .iter()
        .filter(|r| scope(r) && matches(*r, &terms, view.search_scope))
        .cloned()
        .collect();

    if let Some(field) = view.sort_field {
        out.sort_by(|a, b| {
            let cmp = compare_by(a, b, field);
            match view.sort_direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
    out
}
