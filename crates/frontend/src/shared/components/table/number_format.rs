//! Утилиты форматирования чисел для таблиц

use crate::shared::master_data::form::clean_money;
use crate::shared::master_data::CellFormat;

/// Placeholder for an empty or unreadable cell
pub const EMPTY_CELL: &str = "-";

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после запятой
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money as the backend sends it (`"$1,250.00"`, `"18.5"`) to two decimals.
pub fn format_amount(raw: &str) -> String {
    let cleaned = clean_money(raw.trim());
    match cleaned.parse::<f64>() {
        Ok(value) => format_number_with_decimals(value, 2),
        Err(_) => EMPTY_CELL.to_string(),
    }
}

/// Display text of one list cell.
pub fn format_cell(raw: Option<String>, format: CellFormat) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return EMPTY_CELL.to_string();
    };
    match format {
        CellFormat::Amount => format_amount(&raw),
        CellFormat::Text | CellFormat::Number => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
    }

    #[test]
    fn test_format_amount_from_money_text() {
        assert_eq!(format_amount("$1,250.00"), "1,250.00");
        assert_eq!(format_amount("18.5"), "18.50");
        assert_eq!(format_amount("n/a"), "-");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(None, CellFormat::Text), "-");
        assert_eq!(format_cell(Some("  ".into()), CellFormat::Amount), "-");
        assert_eq!(format_cell(Some("9.00".into()), CellFormat::Number), "9.00");
        assert_eq!(format_cell(Some("true".into()), CellFormat::Text), "true");
    }
}
