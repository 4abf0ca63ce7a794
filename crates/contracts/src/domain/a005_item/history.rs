//! Read-only transaction history of one item: confirmed purchases, posted
//! sales and the stock ledger (`/api/items/:code/{purchases,sales,ledger}`).

use serde::Deserialize;

use crate::domain::common::loose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Purchases,
    Sales,
    Ledger,
}

impl HistoryKind {
    pub const ALL: [HistoryKind; 3] = [HistoryKind::Purchases, HistoryKind::Sales, HistoryKind::Ledger];

    /// Last path segment of the endpoint
    pub fn segment(&self) -> &'static str {
        match self {
            HistoryKind::Purchases => "purchases",
            HistoryKind::Sales => "sales",
            HistoryKind::Ledger => "ledger",
        }
    }

    pub const fn tab_label(&self) -> &'static str {
        match self {
            HistoryKind::Purchases => "Purchases",
            HistoryKind::Sales => "Sales",
            HistoryKind::Ledger => "Item Ledger",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            HistoryKind::Purchases => "Purchase History (Confirmed Only)",
            HistoryKind::Sales => "Sales History (Posted Only)",
            HistoryKind::Ledger => "Item Ledger (Confirmed/Posted Only)",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            HistoryKind::Purchases => "No confirmed purchase records found",
            HistoryKind::Sales => "No posted sales records found",
            HistoryKind::Ledger => "No confirmed/posted ledger entries found",
        }
    }

    /// Title of the counterparty column for trade lines
    pub fn party_label(&self) -> &'static str {
        match self {
            HistoryKind::Sales => "Customer",
            _ => "Supplier",
        }
    }
}

/// One purchase or sales invoice line; the backend names the party
/// `supplier_name` or `customer_name`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeLine {
    #[serde(default, deserialize_with = "loose::string")]
    pub tran_date: String,
    #[serde(alias = "supplier_name", alias = "customer_name", default, deserialize_with = "loose::string")]
    pub party_name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub qty: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub rate: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub amount: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub invoice_no: String,
}

/// Stock movement with the running balance, newest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerEntry {
    #[serde(default, deserialize_with = "loose::string")]
    pub tran_date: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub tran_type: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub reference: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub qty_in: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub qty_out: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub balance: String,
}

/// `"2024-05-01T00:00:00.000Z"` → `"2024-05-01"`; other text unchanged.
pub fn display_date(raw: &str) -> &str {
    match raw.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => raw,
    }
}

/// Ledger quantities show `-` instead of zero.
pub fn quantity_or_dash(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v != 0.0 => trimmed,
        Ok(_) => "-",
        Err(_) if trimmed.is_empty() => "-",
        Err(_) => trimmed,
    }
}
