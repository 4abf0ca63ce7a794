use contracts::domain::common::MasterRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{browser_confirm, PageContext};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_cell, SortableHeaderCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::master_data::paginator;
use thaw::*;

#[component]
pub fn ListView<R: MasterRecord>(ctx: PageContext<R>) -> impl IntoView {
    let PageContext {
        config,
        state,
        gateway,
        ordered,
        window,
        ..
    } = ctx.clone();
    let router = ctx.router();

    let refresh = {
        let gateway = gateway.clone();
        move |_: leptos::ev::MouseEvent| {
            let gateway = gateway.clone();
            spawn_local(async move {
                gateway.refresh().await;
            });
        }
    };

    let add_router = router.clone();
    let on_search = Callback::new(move |term: String| state.update(|s| s.view.set_search_term(term)));
    let on_scope = Callback::new(move |scope| state.update(|s| s.view.set_search_scope(scope)));
    let on_sort = Callback::new(move |field| state.update(|s| s.view.toggle_sort(field)));
    let on_previous = Callback::new(move |_: ()| {
        let total = ordered.with_untracked(Vec::len);
        state.update(|s| paginator::go_previous(&mut s.view, total));
    });
    let on_next = Callback::new(move |_: ()| {
        let total = ordered.with_untracked(Vec::len);
        state.update(|s| paginator::go_next(&mut s.view, total));
    });

    let header_cells = config
        .columns
        .iter()
        .map(|column| {
            let field = column.field;
            view! {
                <SortableHeaderCell
                    label=column.label
                    field=field
                    indicator=Signal::derive(move || state.with(|s| s.view.sort_indicator(field)))
                    on_sort=on_sort
                    align_right=column.align_right()
                />
            }
        })
        .collect_view();

    let column_count = config.columns.len() + 1;

    let rows = move || {
        let page = window.get();
        let records = ordered.with(|o| page.slice(o).to_vec());
        if records.is_empty() {
            let loaded = state.with(|s| s.store.is_loaded());
            let text = if loaded {
                format!("No {} found", config.list_title.to_lowercase())
            } else {
                "Loading...".to_string()
            };
            return view! {
                <TableRow>
                    <TableCell class="table__cell--empty" attr:colspan=column_count.to_string()>
                        <TableCellLayout>
                            {(!loaded).then(|| view! { <Spinner /> })}
                            {text}
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        records
            .into_iter()
            .map(|record| {
                let id = record.id();
                let cells = config
                    .columns
                    .iter()
                    .map(|column| {
                        let class = if column.align_right() { "table__cell--right" } else { "" };
                        let text = format_cell(record.field_text(column.field), column.format);
                        view! {
                            <TableCell class=class>
                                <TableCellLayout truncate=true>
                                    {text}
                                </TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                let edit_router = router.clone();
                let row_router = router.clone();
                let remove_gateway = gateway.clone();
                view! {
                    <TableRow on:dblclick=move |_| row_router.go_to_edit(id) attr:style="cursor: pointer;">
                        {cells}
                        <TableCell class="table__cell--actions">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| edit_router.go_to_edit(id)
                                attr:title="Edit"
                            >
                                {icon("edit")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                disabled=Signal::derive(move || state.with(|s| s.pending))
                                on_click=move |_| {
                                    let gateway = remove_gateway.clone();
                                    spawn_local(async move {
                                        gateway.remove(id, &browser_confirm).await;
                                    });
                                }
                                attr:title="Delete"
                            >
                                {icon("delete")}
                            </Button>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <PageHeader title=Signal::derive(move || config.list_title.to_string())>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| add_router.go_to_new()>
                {icon("plus")}
                {format!(" Add New {}", config.entity_name)}
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=refresh
                disabled=Signal::derive(move || state.with(|s| s.refreshing))
            >
                {icon("refresh")}
                " Refresh"
            </Button>
        </PageHeader>

        <div class="page__content">
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.view.search_term.clone()))
                    on_change=on_search
                    scope_options=config.search_options
                    scope=Signal::derive(move || state.with(|s| s.view.search_scope))
                    on_scope_change=on_scope
                    placeholder=format!("Search {}...", config.list_title.to_lowercase())
                />
                <PaginationControls window=window on_previous=on_previous on_next=on_next />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>
        </div>
    }
}
