use contracts::dashboards::d100_daily_summary::DailySummaryResponse;
use contracts::domain::a001_order::{Order, OrderStatus, PaymentMethod};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dashboards::d100_daily_summary::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_elapsed, format_time, today};
use crate::shared::format::{format_price, format_price_f64};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Time,
    Customer,
    Status,
    Total,
}

fn sort_orders(orders: &mut [Order], column: SortColumn, descending: bool) {
    match column {
        SortColumn::Time => orders.sort_by_key(|o| o.created_at),
        SortColumn::Customer => orders.sort_by(|a, b| a.customer_name.cmp(&b.customer_name)),
        SortColumn::Status => orders.sort_by_key(|o| o.status == OrderStatus::Completed),
        SortColumn::Total => orders.sort_by_key(|o| o.total_price),
    }
    if descending {
        orders.reverse();
    }
}

#[component]
pub fn DailySummaryDashboard() -> impl IntoView {
    let date = RwSignal::new(today());
    // "" = all payment methods
    let payment_filter = RwSignal::new(String::new());
    let summary = RwSignal::new(Option::<DailySummaryResponse>::None);
    let error = RwSignal::new(Option::<String>::None);
    let sort = RwSignal::new((SortColumn::Time, true));

    let toggle_sort = move |column: SortColumn| {
        sort.update(|(current, descending)| {
            if *current == column {
                *descending = !*descending;
            } else {
                *current = column;
                *descending = false;
            }
        });
    };

    // Reload whenever the date or the filter changes
    Effect::new(move |_| {
        let d = date.get();
        let pm = PaymentMethod::parse(&payment_filter.get());
        spawn_local(async move {
            match api::get_daily_summary(&d, pm).await {
                Ok(data) => {
                    summary.set(Some(data));
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки сводки: {}", e))),
            }
        });
    });

    let revenue = Signal::derive(move || {
        summary.get().map(|s| format_price(s.total_revenue))
    });
    let order_count = Signal::derive(move || {
        summary.get().map(|s| s.order_count.to_string())
    });
    let avg_check = Signal::derive(move || {
        summary.get().map(|s| format_price_f64(s.avg_check))
    });
    let avg_prep = Signal::derive(move || {
        summary
            .get()
            .map(|s| format_elapsed(s.avg_prep_seconds.round() as i64))
    });

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__toolbar">
                <h2>"Выручка за день"</h2>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| date.set(event_target_value(&ev))
                />
                <select on:change=move |ev| payment_filter.set(event_target_value(&ev))>
                    <option value="">"Все способы оплаты"</option>
                    <option value="cash">"Наличные"</option>
                    <option value="card">"Карта"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="dashboard-page__cards">
                <StatCard label="Выручка".to_string() value=revenue />
                <StatCard label="Заказов".to_string() value=order_count />
                <StatCard label="Средний чек".to_string() value=avg_check />
                <StatCard label="Среднее время приготовления".to_string() value=avg_prep />
            </div>

            <table class="dashboard-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Time)>"Время"</th>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Customer)>"Клиент"</th>
                        <th>"Позиции"</th>
                        <th>"Оплата"</th>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Status)>"Статус"</th>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Total)>"Сумма"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let mut orders = summary
                            .get()
                            .map(|s| s.orders)
                            .unwrap_or_default();
                        let (column, descending) = sort.get();
                        sort_orders(&mut orders, column, descending);
                        orders
                            .into_iter()
                            .map(|o| {
                                let items = o
                                    .items
                                    .iter()
                                    .map(|i| {
                                        if i.quantity > 1 {
                                            format!("{} ×{}", i.name, i.quantity)
                                        } else {
                                            i.name.clone()
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                let payment = match o.payment_method {
                                    PaymentMethod::Cash => "Наличные",
                                    PaymentMethod::Card => "Карта",
                                };
                                let (status, status_class) = match o.status {
                                    OrderStatus::Preparing => ("Готовится", "status status--preparing"),
                                    OrderStatus::Completed => ("Завершен", "status status--completed"),
                                };
                                view! {
                                    <tr>
                                        <td>{format_time(o.created_at)}</td>
                                        <td>{o.customer_name.clone()}</td>
                                        <td class="dashboard-table__items">{items}</td>
                                        <td>{payment}</td>
                                        <td><span class=status_class>{status}</span></td>
                                        <td>{format_price(o.total_price)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
