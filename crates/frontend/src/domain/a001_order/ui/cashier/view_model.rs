use contracts::catalog::{Drink, ModifierGroup, SelectionType};
use contracts::domain::a001_order::pricing::{change_due, item_signature, price_selection};
use contracts::domain::a001_order::{DraftItem, Order, OrderDraft, OrderItem, PaymentMethod};
use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;

/// One cart line; `modifier_ids` is what goes into the order draft,
/// `item` is the priced rendition shown to the cashier.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item: OrderItem,
    pub modifier_ids: Vec<String>,
}

/// ViewModel for the order entry screen
#[derive(Clone, Copy)]
pub struct CashierViewModel {
    pub catalog: RwSignal<Vec<Drink>>,
    pub customers: RwSignal<Vec<Customer>>,
    pub cart: RwSignal<Vec<CartLine>>,
    /// Drink currently opened in the customization dialog
    pub selected_drink: RwSignal<Option<Drink>>,
    pub selected_modifiers: RwSignal<Vec<String>>,
    pub customer_name: RwSignal<String>,
    pub customer_id: RwSignal<Option<String>>,
    pub payment_method: RwSignal<PaymentMethod>,
    pub cash_received: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub last_order: RwSignal<Option<Order>>,
    pub submitting: RwSignal<bool>,
}

impl CashierViewModel {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            cart: RwSignal::new(Vec::new()),
            selected_drink: RwSignal::new(None),
            selected_modifiers: RwSignal::new(Vec::new()),
            customer_name: RwSignal::new(String::new()),
            customer_id: RwSignal::new(None),
            payment_method: RwSignal::new(PaymentMethod::Cash),
            cash_received: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            last_order: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let catalog = self.catalog;
        let customers = self.customers;
        let error = self.error;
        spawn_local(async move {
            match model::fetch_catalog().await {
                Ok(drinks) => catalog.set(drinks),
                Err(e) => error.set(Some(format!("Ошибка загрузки меню: {}", e))),
            }
            // The directory is optional on this screen; a failure only
            // disables the picker
            if let Ok(list) = model::fetch_customers().await {
                customers.set(list);
            }
        });
    }

    /// Open the customization dialog with single-group defaults preselected
    pub fn open_drink(&self, drink: Drink) {
        let defaults: Vec<String> = drink
            .modifier_groups
            .iter()
            .filter(|g| g.selection == SelectionType::Single)
            .filter_map(|g| g.items.first().map(|m| m.id.clone()))
            .collect();
        self.selected_modifiers.set(defaults);
        self.selected_drink.set(Some(drink));
    }

    pub fn close_dialog(&self) {
        self.selected_drink.set(None);
        self.selected_modifiers.set(Vec::new());
    }

    pub fn toggle_modifier(&self, group: &ModifierGroup, modifier_id: &str) {
        let group_ids: Vec<String> = group.items.iter().map(|m| m.id.clone()).collect();
        let modifier_id = modifier_id.to_string();
        self.selected_modifiers.update(|selected| match group.selection {
            SelectionType::Single => {
                selected.retain(|id| !group_ids.contains(id));
                selected.push(modifier_id);
            }
            SelectionType::Multiple => {
                if let Some(pos) = selected.iter().position(|id| id == &modifier_id) {
                    selected.remove(pos);
                } else {
                    selected.push(modifier_id);
                }
            }
        });
    }

    pub fn is_modifier_selected(&self, modifier_id: &str) -> bool {
        self.selected_modifiers
            .get()
            .iter()
            .any(|id| id == modifier_id)
    }

    /// Price of the dialog selection as currently configured
    pub fn dialog_price(&self) -> Option<i64> {
        self.selected_drink
            .get()
            .map(|d| price_selection(&d, &self.selected_modifiers.get()).final_price)
    }

    /// Move the dialog selection into the cart, merging equal configurations
    pub fn add_selected_to_cart(&self) {
        let Some(drink) = self.selected_drink.get() else {
            return;
        };
        let priced = price_selection(&drink, &self.selected_modifiers.get());
        let signature = item_signature(&drink.id, &priced.modifier_ids);

        let line = CartLine {
            item: OrderItem {
                id: signature,
                drink_id: drink.id.clone(),
                name: drink.name.clone(),
                base_price: drink.price,
                customizations: priced.customizations.clone(),
                final_price: priced.final_price,
                is_ready: false,
                quantity: 1,
            },
            modifier_ids: priced.modifier_ids,
        };

        self.cart.update(|cart| {
            match cart.iter_mut().find(|l| l.item.id == line.item.id) {
                Some(existing) => existing.item.quantity += 1,
                None => cart.push(line),
            }
        });
        self.close_dialog();
    }

    pub fn change_quantity(&self, line_id: &str, delta: i64) {
        let line_id = line_id.to_string();
        self.cart.update(|cart| {
            if let Some(line) = cart.iter_mut().find(|l| l.item.id == line_id) {
                line.item.quantity += delta;
            }
            cart.retain(|l| l.item.quantity > 0);
        });
    }

    pub fn remove_line(&self, line_id: &str) {
        let line_id = line_id.to_string();
        self.cart.update(|cart| cart.retain(|l| l.item.id != line_id));
    }

    pub fn total(&self) -> i64 {
        self.cart
            .get()
            .iter()
            .map(|l| l.item.final_price * l.item.quantity)
            .sum()
    }

    /// Change for a cash payment; None until the received amount covers the total
    pub fn change(&self) -> Option<i64> {
        if self.payment_method.get() != PaymentMethod::Cash {
            return None;
        }
        let received: i64 = self.cash_received.get().trim().parse().ok()?;
        change_due(received, self.total())
    }

    pub fn pick_customer(&self, customer: &Customer) {
        self.customer_name.set(customer.name.clone());
        self.customer_id.set(Some(customer.id.clone()));
    }

    /// Cash orders cannot finalize until the received amount covers the total
    pub fn can_submit(&self) -> bool {
        if self.cart.get().is_empty() || self.submitting.get() {
            return false;
        }
        self.payment_method.get() != PaymentMethod::Cash || self.change().is_some()
    }

    pub fn submit_command(&self) {
        if self.cart.get().is_empty() {
            self.error.set(Some("Заказ пуст".to_string()));
            return;
        }
        if self.payment_method.get() == PaymentMethod::Cash && self.change().is_none() {
            self.error.set(Some("Недостаточно наличных".to_string()));
            return;
        }

        let draft = OrderDraft {
            customer_name: Some(self.customer_name.get().trim().to_string())
                .filter(|s| !s.is_empty()),
            customer_id: self.customer_id.get(),
            payment_method: Some(self.payment_method.get()),
            items: self
                .cart
                .get()
                .iter()
                .map(|l| DraftItem {
                    drink_id: l.item.drink_id.clone(),
                    modifier_ids: l.modifier_ids.clone(),
                    quantity: l.item.quantity,
                })
                .collect(),
        };

        let vm = *self;
        vm.submitting.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match model::submit_order(&draft).await {
                Ok(order) => {
                    vm.cart.set(Vec::new());
                    vm.customer_name.set(String::new());
                    vm.customer_id.set(None);
                    vm.cash_received.set(String::new());
                    vm.last_order.set(Some(order));
                }
                Err(e) => vm.error.set(Some(format!("Не удалось создать заказ: {}", e))),
            }
            vm.submitting.set(false);
        });
    }
}
