use leptos::prelude::*;

use contracts::domain::a001_order::Order;

use super::view_model::TrackerViewModel;
use crate::shared::date_utils::{format_elapsed, format_time};
use crate::shared::format::format_price;

#[component]
pub fn TrackerPage() -> impl IntoView {
    let vm = TrackerViewModel::new();
    vm.start();

    view! {
        <div class="tracker-page">
            <div class="tracker-page__toolbar">
                <h2>"Активные заказы"</h2>
                <Show
                    when=move || vm.sound_enabled.get()
                    fallback=move || view! {
                        <button class="btn" on:click=move |_| vm.enable_sound()>
                            "🔔 Включить звук"
                        </button>
                    }
                >
                    <span class="tracker-page__sound-on">"Звук включен"</span>
                </Show>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let orders = vm.orders.get();
                if orders.is_empty() {
                    view! { <div class="tracker-empty">"Нет активных заказов"</div> }.into_any()
                } else {
                    view! {
                        <div class="tracker-grid">
                            {orders
                                .into_iter()
                                .map(|order| view! { <OrderCard vm=vm order=order /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OrderCard(vm: TrackerViewModel, order: Order) -> impl IntoView {
    let order_id = order.id.clone();
    let complete_id = order.id.clone();
    let created = order.created_at;
    let estimated = order.estimated_prep_seconds;

    let elapsed = move || {
        let now = vm.now.get();
        (now - created).num_seconds()
    };
    let card_class = move || {
        if elapsed() > estimated {
            "order-card order-card--overdue"
        } else {
            "order-card"
        }
    };

    view! {
        <div class=card_class>
            <div class="order-card__header">
                <span class="order-card__customer">{order.customer_name.clone()}</span>
                <span class="order-card__time">{format_time(order.created_at)}</span>
            </div>
            <div class="order-card__timer">
                <span>{move || format_elapsed(elapsed())}</span>
                <span class="order-card__estimate">
                    {format!(" / {}", format_elapsed(estimated))}
                </span>
            </div>

            <ul class="order-card__items">
                {order
                    .items
                    .iter()
                    .map(|item| {
                        let oid = order_id.clone();
                        let iid = item.id.clone();
                        let checked = item.is_ready;
                        let label = if item.quantity > 1 {
                            format!("{} ×{}", item.name, item.quantity)
                        } else {
                            item.name.clone()
                        };
                        let mods = item.customizations.clone();
                        view! {
                            <li class="order-card__item">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| vm.toggle_item_ready(&oid, &iid, !checked)
                                    />
                                    <span class:done=checked>{label}</span>
                                </label>
                                <Show when={
                                    let m = mods.clone();
                                    move || !m.is_empty()
                                }>
                                    <span class="order-card__mods">{mods.clone()}</span>
                                </Show>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="order-card__footer">
                <span class="order-card__total">{format_price(order.total_price)}</span>
                <button class="btn btn-primary" on:click=move |_| vm.complete_command(&complete_id)>
                    "Завершить"
                </button>
            </div>
        </div>
    }
}
