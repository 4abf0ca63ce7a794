//! Dirty-state gating of the Save action.

use super::form::FormValues;

/// True iff some listed field's trimmed text differs from the baseline.
pub fn compute_dirty(form: &FormValues, baseline: &FormValues, fields: &[&'static str]) -> bool {
    fields
        .iter()
        .any(|f| form.get(f).trim() != baseline.get(f).trim())
}

/// Required fields that are blank, in declaration order.
pub fn missing_required(form: &FormValues, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|f| form.get(f).trim().is_empty())
        .collect()
}

/// A form may be saved when it changed and nothing required is blank.
pub fn can_save(
    form: &FormValues,
    baseline: &FormValues,
    fields: &[&'static str],
    required: &[&'static str],
) -> bool {
    compute_dirty(form, baseline, fields) && missing_required(form, required).is_empty()
}
