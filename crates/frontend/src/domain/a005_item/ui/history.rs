//! Purchases / Sales / Item Ledger tabs of a saved item.
//!
//! Each tab refetches when opened so freshly confirmed or posted
//! documents show up.

use contracts::domain::a005_item::history::{
    display_date, quantity_or_dash, HistoryKind, LedgerEntry, TradeLine,
};
use contracts::domain::common::RecordId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::shared::api_utils::api_base;
use crate::shared::master_data::{ApiError, DetailTab};

pub const ITEM_HISTORY_TABS: &[DetailTab] = &[
    DetailTab {
        label: HistoryKind::Purchases.tab_label(),
        render: purchases_tab,
    },
    DetailTab {
        label: HistoryKind::Sales.tab_label(),
        render: sales_tab,
    },
    DetailTab {
        label: HistoryKind::Ledger.tab_label(),
        render: ledger_tab,
    },
];

fn purchases_tab(item_code: RecordId) -> AnyView {
    view! { <TradeHistory item_code=item_code kind=HistoryKind::Purchases /> }.into_any()
}

fn sales_tab(item_code: RecordId) -> AnyView {
    view! { <TradeHistory item_code=item_code kind=HistoryKind::Sales /> }.into_any()
}

fn ledger_tab(item_code: RecordId) -> AnyView {
    view! { <LedgerHistory item_code=item_code /> }.into_any()
}

pub fn history_url(base: &str, item_code: RecordId, kind: HistoryKind) -> String {
    format!(
        "{}/api/items/{}/{}",
        base,
        urlencoding::encode(&item_code.as_string()),
        kind.segment()
    )
}

async fn fetch_history<T: DeserializeOwned>(item_code: RecordId, kind: HistoryKind) -> Result<Vec<T>, ApiError> {
    let url = history_url(&api_base(), item_code, kind);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .header("Cache-Control", "no-cache")
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: None,
        });
    }
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `None` while loading; a failed fetch shows as an empty history.
fn load<T>(item_code: RecordId, kind: HistoryKind) -> RwSignal<Option<Vec<T>>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let rows = RwSignal::new(None::<Vec<T>>);
    spawn_local(async move {
        let loaded = match fetch_history::<T>(item_code, kind).await {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("items: {} of {} failed: {}", kind.segment(), item_code, e);
                Vec::new()
            }
        };
        rows.try_set(Some(loaded));
    });
    rows
}

#[component]
fn HistoryFrame(kind: HistoryKind, loading: Signal<bool>, is_empty: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <div class="item-history">
            <h3 class="item-history__title">{kind.heading()}</h3>
            <Show
                when=move || !loading.get()
                fallback=move || view! {
                    <div class="item-history__loading">
                        <Spinner />
                        {format!("Loading {}...", kind.segment())}
                    </div>
                }
            >
                <Show
                    when=move || !is_empty.get()
                    fallback=move || view! { <div class="item-history__empty">{kind.empty_text()}</div> }
                >
                    {children.with_value(|children| children())}
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn TradeHistory(item_code: RecordId, kind: HistoryKind) -> impl IntoView {
    let rows = load::<TradeLine>(item_code, kind);
    let loading = Signal::derive(move || rows.with(Option::is_none));
    let is_empty = Signal::derive(move || rows.with(|r| r.as_ref().is_some_and(Vec::is_empty)));

    view! {
        <HistoryFrame kind=kind loading=loading is_empty=is_empty>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>{kind.party_label()}</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"Qty"</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"Rate"</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Invoice"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        rows.get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|line| view! {
                                <TableRow>
                                    <TableCell>{display_date(&line.tran_date).to_string()}</TableCell>
                                    <TableCell>{line.party_name}</TableCell>
                                    <TableCell class="table__cell--right">{line.qty}</TableCell>
                                    <TableCell class="table__cell--right">{line.rate}</TableCell>
                                    <TableCell class="table__cell--right">{line.amount}</TableCell>
                                    <TableCell>{line.invoice_no}</TableCell>
                                </TableRow>
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </HistoryFrame>
    }
}

#[component]
fn LedgerHistory(item_code: RecordId) -> impl IntoView {
    let kind = HistoryKind::Ledger;
    let rows = load::<LedgerEntry>(item_code, kind);
    let loading = Signal::derive(move || rows.with(Option::is_none));
    let is_empty = Signal::derive(move || rows.with(|r| r.as_ref().is_some_and(Vec::is_empty)));

    view! {
        <HistoryFrame kind=kind loading=loading is_empty=is_empty>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Reference"</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"In"</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"Out"</TableHeaderCell>
                        <TableHeaderCell class="table__header-cell--right">"Balance"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        rows.get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|entry| view! {
                                <TableRow>
                                    <TableCell>{display_date(&entry.tran_date).to_string()}</TableCell>
                                    <TableCell>{entry.tran_type.clone()}</TableCell>
                                    <TableCell>{entry.reference.clone()}</TableCell>
                                    <TableCell class="table__cell--right">{quantity_or_dash(&entry.qty_in).to_string()}</TableCell>
                                    <TableCell class="table__cell--right">{quantity_or_dash(&entry.qty_out).to_string()}</TableCell>
                                    <TableCell class="table__cell--right">{entry.balance.clone()}</TableCell>
                                </TableRow>
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </HistoryFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_urls() {
        assert_eq!(
            history_url("http://localhost:5000", RecordId(512), HistoryKind::Ledger),
            "http://localhost:5000/api/items/512/ledger"
        );
        assert_eq!(
            history_url("", RecordId(7), HistoryKind::Purchases),
            "/api/items/7/purchases"
        );
    }

    #[test]
    fn test_one_tab_per_history() {
        let labels: Vec<&str> = ITEM_HISTORY_TABS.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Purchases", "Sales", "Item Ledger"]);
    }
}
