use leptos::prelude::*;

use contracts::catalog::Drink;
use contracts::domain::a001_order::PaymentMethod;

use super::view_model::CashierViewModel;
use crate::shared::format::format_price;

#[component]
pub fn CashierPage() -> impl IntoView {
    let vm = CashierViewModel::new();
    vm.load();

    view! {
        <div class="cashier-page">
            <section class="cashier-page__menu">
                <h2>"Меню"</h2>
                {move || {
                    let selected = vm.catalog.get();
                    let mut sections = Vec::new();
                    let mut seen: Vec<String> = Vec::new();
                    for drink in &selected {
                        if !seen.contains(&drink.category) {
                            seen.push(drink.category.clone());
                        }
                    }
                    for category in seen {
                        let drinks: Vec<Drink> = selected
                            .iter()
                            .filter(|d| d.category == category)
                            .cloned()
                            .collect();
                        sections.push(view! {
                            <div class="menu-section">
                                <h3>{category.clone()}</h3>
                                <div class="menu-grid">
                                    {drinks
                                        .into_iter()
                                        .map(|drink| {
                                            let label = drink.name.clone();
                                            let price = format_price(drink.price);
                                            view! {
                                                <button
                                                    class="menu-card"
                                                    on:click=move |_| vm.open_drink(drink.clone())
                                                >
                                                    <span class="menu-card__name">{label}</span>
                                                    <span class="menu-card__price">{price}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        });
                    }
                    sections.into_iter().collect_view()
                }}
            </section>

            <CustomizeDialog vm=vm />
            <CartPanel vm=vm />
        </div>
    }
}

/// Modal for picking milk, syrups and extras of one drink
#[component]
fn CustomizeDialog(vm: CashierViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.selected_drink.get().is_some()>
            <div class="dialog-overlay" on:click=move |_| vm.close_dialog()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    {move || {
                        vm.selected_drink
                            .get()
                            .map(|drink| {
                                let groups = drink.modifier_groups.clone();
                                view! {
                                    <h3>{drink.name.clone()}</h3>
                                    {groups
                                        .into_iter()
                                        .map(|group| {
                                            let group_for_toggle = group.clone();
                                            view! {
                                                <div class="modifier-group">
                                                    <h4>{group.name.clone()}</h4>
                                                    {group
                                                        .items
                                                        .iter()
                                                        .map(|modifier| {
                                                            let m_id = modifier.id.clone();
                                                            let toggle_id = modifier.id.clone();
                                                            let group = group_for_toggle.clone();
                                                            let price_tag = if modifier.price > 0 {
                                                                format!(" +{}", format_price(modifier.price))
                                                            } else {
                                                                String::new()
                                                            };
                                                            view! {
                                                                <label class="modifier-option">
                                                                    <input
                                                                        type="checkbox"
                                                                        prop:checked=move || vm.is_modifier_selected(&m_id)
                                                                        on:change=move |_| vm.toggle_modifier(&group, &toggle_id)
                                                                    />
                                                                    <span>{modifier.name.clone()}{price_tag}</span>
                                                                </label>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                }
                            })
                    }}

                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| vm.close_dialog()>
                            "Отмена"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| vm.add_selected_to_cart()>
                            {move || {
                                match vm.dialog_price() {
                                    Some(p) => format!("В заказ · {}", format_price(p)),
                                    None => "В заказ".to_string(),
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartPanel(vm: CashierViewModel) -> impl IntoView {
    view! {
        <aside class="cashier-page__cart">
            <h2>"Заказ"</h2>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                vm.last_order
                    .get()
                    .map(|o| view! {
                        <div class="success">
                            {format!("Заказ для {} создан", o.customer_name)}
                        </div>
                    })
            }}

            <div class="cart-lines">
                {move || {
                    let cart = vm.cart.get();
                    if cart.is_empty() {
                        view! { <div class="cart-empty">"Выберите напитки из меню"</div> }
                            .into_any()
                    } else {
                        cart.into_iter()
                            .map(|line| {
                                let inc_id = line.item.id.clone();
                                let dec_id = line.item.id.clone();
                                let rm_id = line.item.id.clone();
                                view! {
                                    <div class="cart-line">
                                        <div class="cart-line__info">
                                            <span class="cart-line__name">{line.item.name.clone()}</span>
                                            <Show when={
                                                let c = line.item.customizations.clone();
                                                move || !c.is_empty()
                                            }>
                                                <span class="cart-line__mods">{line.item.customizations.clone()}</span>
                                            </Show>
                                        </div>
                                        <div class="cart-line__qty">
                                            <button on:click=move |_| vm.change_quantity(&dec_id, -1)>"−"</button>
                                            <span>{line.item.quantity}</span>
                                            <button on:click=move |_| vm.change_quantity(&inc_id, 1)>"+"</button>
                                        </div>
                                        <span class="cart-line__sum">
                                            {format_price(line.item.final_price * line.item.quantity)}
                                        </span>
                                        <button class="btn-link" on:click=move |_| vm.remove_line(&rm_id)>
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <div class="cart-customer">
                <label>"Имя клиента"</label>
                <input
                    type="text"
                    placeholder="Гость"
                    prop:value=move || vm.customer_name.get()
                    on:input=move |ev| {
                        vm.customer_name.set(event_target_value(&ev));
                        vm.customer_id.set(None);
                    }
                />
                <Show when=move || !vm.customers.get().is_empty()>
                    <select on:change=move |ev| {
                        let id = event_target_value(&ev);
                        if let Some(c) = vm.customers.get().iter().find(|c| c.id == id) {
                            vm.pick_customer(c);
                        }
                    }>
                        <option value="">"Из справочника..."</option>
                        {move || {
                            vm.customers
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option value=c.id.clone()>
                                            {format!("{} ({})", c.name, c.phone_number)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </Show>
            </div>

            <div class="cart-payment">
                <label class="payment-option">
                    <input
                        type="radio"
                        name="payment"
                        prop:checked=move || vm.payment_method.get() == PaymentMethod::Cash
                        on:change=move |_| vm.payment_method.set(PaymentMethod::Cash)
                    />
                    "Наличные"
                </label>
                <label class="payment-option">
                    <input
                        type="radio"
                        name="payment"
                        prop:checked=move || vm.payment_method.get() == PaymentMethod::Card
                        on:change=move |_| vm.payment_method.set(PaymentMethod::Card)
                    />
                    "Карта"
                </label>

                <Show when=move || vm.payment_method.get() == PaymentMethod::Cash>
                    <input
                        type="number"
                        placeholder="Получено"
                        prop:value=move || vm.cash_received.get()
                        on:input=move |ev| vm.cash_received.set(event_target_value(&ev))
                    />
                    {move || {
                        if vm.cash_received.get().trim().is_empty() {
                            None
                        } else {
                            Some(match vm.change() {
                                Some(change) => view! {
                                    <div class="cart-change">{format!("Сдача: {}", format_price(change))}</div>
                                }
                                    .into_any(),
                                None => view! {
                                    <div class="cart-change cart-change--short">"Недостаточно наличных"</div>
                                }
                                    .into_any(),
                            })
                        }
                    }}
                </Show>
            </div>

            <div class="cart-total">
                <span>"Итого"</span>
                <span>{move || format_price(vm.total())}</span>
            </div>

            <button
                class="btn btn-primary btn-submit"
                disabled=move || !vm.can_submit()
                on:click=move |_| vm.submit_command()
            >
                {move || if vm.submitting.get() { "Отправка..." } else { "Оформить заказ" }}
            </button>
        </aside>
    }
}
