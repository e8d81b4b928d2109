use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Preparing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "preparing" => Some(OrderStatus::Preparing),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One drink line inside an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Signature of (drink, modifier selection); unique within the order
    pub id: String,
    #[serde(rename = "drinkId")]
    pub drink_id: String,
    pub name: String,
    /// Drink base price in rubles
    #[serde(rename = "basePrice")]
    pub base_price: i64,
    /// Free-text modifier summary shown to the barista
    pub customizations: String,
    /// Base price plus selected modifier deltas
    #[serde(rename = "finalPrice")]
    pub final_price: i64,
    #[serde(rename = "isReady", default)]
    pub is_ready: bool,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    /// Directory reference at creation time; not kept consistent afterwards
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Fixed at creation; never recomputed on status changes
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "estimatedPrepSeconds")]
    pub estimated_prep_seconds: i64,
}

impl Order {
    pub fn total_of(items: &[OrderItem]) -> i64 {
        items.iter().map(|i| i.final_price * i.quantity).sum()
    }

    /// Seconds the order has been in preparation as of `now`
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds().max(0)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == OrderStatus::Preparing
            && self.elapsed_seconds(now) > self.estimated_prep_seconds
    }

    /// Forward-only transition: preparing -> completed. There is no reopening.
    pub fn complete(&mut self, at: DateTime<Utc>) -> Result<(), String> {
        if self.status == OrderStatus::Completed {
            return Err("Заказ уже завершен".to_string());
        }
        self.status = OrderStatus::Completed;
        self.completed_at = Some(at);
        Ok(())
    }

    pub fn set_item_ready(&mut self, item_id: &str, ready: bool) -> Result<(), String> {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.is_ready = ready;
                Ok(())
            }
            None => Err(format!("Позиция {} не найдена в заказе", item_id)),
        }
    }

    /// Preparation duration for completed orders, in seconds
    pub fn prep_duration_seconds(&self) -> Option<i64> {
        self.completed_at
            .map(|done| (done - self.created_at).num_seconds())
    }
}

/// Append `item` to a cart, bumping quantity when a line with the same
/// signature already exists.
pub fn add_to_cart(cart: &mut Vec<OrderItem>, item: OrderItem) {
    match cart.iter_mut().find(|existing| existing.id == item.id) {
        Some(existing) => existing.quantity += item.quantity,
        None => cart.push(item),
    }
}

// ============================================================================
// DTO
// ============================================================================

/// One configured drink in a draft posted by the cashier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftItem {
    #[serde(rename = "drinkId")]
    pub drink_id: String,
    #[serde(rename = "modifierIds", default)]
    pub modifier_ids: Vec<String>,
    pub quantity: i64,
}

/// Wire format of a new order; the backend re-prices it from the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub items: Vec<DraftItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str, final_price: i64, quantity: i64) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            drink_id: id.to_string(),
            name: id.to_string(),
            base_price: final_price,
            customizations: String::new(),
            final_price,
            is_ready: false,
            quantity,
        }
    }

    fn order(items: Vec<OrderItem>) -> Order {
        let total = Order::total_of(&items);
        Order {
            id: "o1".to_string(),
            customer_name: "Гость".to_string(),
            customer_id: None,
            items,
            status: OrderStatus::Preparing,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            completed_at: None,
            total_price: total,
            payment_method: PaymentMethod::Card,
            estimated_prep_seconds: 180,
        }
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let items = vec![item("latte:oat-milk", 330, 2), item("espresso", 150, 1)];
        assert_eq!(Order::total_of(&items), 810);
    }

    #[test]
    fn total_survives_completion() {
        let mut o = order(vec![item("latte", 280, 1)]);
        let before = o.total_price;
        o.complete(o.created_at + chrono::Duration::minutes(4)).unwrap();
        assert_eq!(o.total_price, before);
    }

    #[test]
    fn completion_is_forward_only() {
        let mut o = order(vec![item("latte", 280, 1)]);
        let done_at = o.created_at + chrono::Duration::minutes(5);
        o.complete(done_at).unwrap();
        assert_eq!(o.status, OrderStatus::Completed);
        assert!(o.completed_at.unwrap() >= o.created_at);
        assert!(o.complete(done_at).is_err());
    }

    #[test]
    fn identical_signature_bumps_quantity() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, item("latte:oat-milk", 330, 1));
        add_to_cart(&mut cart, item("latte:oat-milk", 330, 1));
        add_to_cart(&mut cart, item("latte", 280, 1));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn item_ready_toggle() {
        let mut o = order(vec![item("latte", 280, 1)]);
        o.set_item_ready("latte", true).unwrap();
        assert!(o.items[0].is_ready);
        assert!(o.set_item_ready("missing", true).is_err());
    }

    #[test]
    fn overdue_flag() {
        let o = order(vec![item("latte", 280, 1)]);
        assert!(!o.is_overdue(o.created_at + chrono::Duration::seconds(180)));
        assert!(o.is_overdue(o.created_at + chrono::Duration::seconds(181)));
    }

    #[test]
    fn prep_duration_only_for_completed() {
        let mut o = order(vec![item("latte", 280, 1)]);
        assert_eq!(o.prep_duration_seconds(), None);
        o.complete(o.created_at + chrono::Duration::seconds(240)).unwrap();
        assert_eq!(o.prep_duration_seconds(), Some(240));
    }
}
