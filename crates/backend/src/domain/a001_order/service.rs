use chrono::Utc;
use contracts::catalog;
use contracts::domain::a001_order::pricing::{item_signature, price_selection};
use contracts::domain::a001_order::{
    add_to_cart, Order, OrderDraft, OrderItem, OrderStatus, PaymentMethod,
};
use uuid::Uuid;

use super::repository;

/// Build the order items from a draft, re-pricing every line from the catalog.
/// Lines with the same (drink, modifier) signature are merged.
fn build_items(draft: &OrderDraft) -> anyhow::Result<Vec<OrderItem>> {
    let mut items: Vec<OrderItem> = Vec::new();
    for line in &draft.items {
        if line.quantity < 1 {
            anyhow::bail!("Количество должно быть не меньше 1");
        }
        let drink = catalog::find_drink(&line.drink_id)
            .ok_or_else(|| anyhow::anyhow!("Напиток '{}' не найден", line.drink_id))?;
        let priced = price_selection(drink, &line.modifier_ids);
        add_to_cart(
            &mut items,
            OrderItem {
                id: item_signature(&drink.id, &priced.modifier_ids),
                drink_id: drink.id.clone(),
                name: drink.name.clone(),
                base_price: drink.price,
                customizations: priced.customizations,
                final_price: priced.final_price,
                is_ready: false,
                quantity: line.quantity,
            },
        );
    }
    Ok(items)
}

fn estimated_prep_seconds(items: &[OrderItem]) -> i64 {
    items
        .iter()
        .map(|item| {
            let prep = catalog::find_drink(&item.drink_id)
                .map(|d| d.prep_minutes)
                .unwrap_or(0);
            prep * 60 * item.quantity
        })
        .sum()
}

/// Create a new order from a cashier draft. The total is fixed here and
/// never recomputed afterwards.
pub async fn create(draft: OrderDraft) -> anyhow::Result<Order> {
    let items = build_items(&draft)?;
    if items.is_empty() {
        anyhow::bail!("Заказ пуст");
    }

    let customer_name = draft
        .customer_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Гость")
        .to_string();

    let order = Order {
        id: Uuid::new_v4().to_string(),
        customer_name,
        customer_id: draft.customer_id.clone(),
        estimated_prep_seconds: estimated_prep_seconds(&items),
        total_price: Order::total_of(&items),
        items,
        status: OrderStatus::Preparing,
        created_at: Utc::now(),
        completed_at: None,
        payment_method: draft.payment_method.unwrap_or(PaymentMethod::Card),
    };

    repository::insert(&order).await?;
    tracing::info!(
        "Order {} created: {} positions, {} rub, {}",
        order.id,
        order.items.len(),
        order.total_price,
        order.payment_method.as_str()
    );
    Ok(order)
}

pub async fn list_active() -> anyhow::Result<Vec<Order>> {
    repository::list_active().await
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Order>> {
    repository::get_by_id(id).await
}

/// Transition preparing -> completed and stamp completedAt.
/// Returns None when the order does not exist.
pub async fn complete(id: &str) -> anyhow::Result<Option<Order>> {
    let Some(mut order) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    order
        .complete(Utc::now())
        .map_err(|e| anyhow::anyhow!(e))?;
    repository::update(&order).await?;
    Ok(Some(order))
}

/// Toggle the ready flag of a single item on the tracker board
pub async fn set_item_ready(
    order_id: &str,
    item_id: &str,
    ready: bool,
) -> anyhow::Result<Option<Order>> {
    let Some(mut order) = repository::get_by_id(order_id).await? else {
        return Ok(None);
    };
    order
        .set_item_ready(item_id, ready)
        .map_err(|e| anyhow::anyhow!(e))?;
    repository::update(&order).await?;
    Ok(Some(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::DraftItem;

    fn draft_item(drink_id: &str, modifier_ids: &[&str], quantity: i64) -> DraftItem {
        DraftItem {
            drink_id: drink_id.to_string(),
            modifier_ids: modifier_ids.iter().map(|s| s.to_string()).collect(),
            quantity,
        }
    }

    #[test]
    fn build_items_reprices_from_catalog() {
        let draft = OrderDraft {
            items: vec![draft_item("latte", &["oat-milk", "vanilla"], 1)],
            ..Default::default()
        };
        let items = build_items(&draft).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].final_price, 280 + 50 + 40);
        assert_eq!(items[0].base_price, 280);
    }

    #[test]
    fn build_items_merges_identical_lines() {
        let draft = OrderDraft {
            items: vec![
                draft_item("espresso", &[], 1),
                draft_item("espresso", &[], 1),
                draft_item("espresso", &["cinnamon"], 1),
            ],
            ..Default::default()
        };
        let items = build_items(&draft).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn build_items_rejects_unknown_drink() {
        let draft = OrderDraft {
            items: vec![draft_item("unknown", &[], 1)],
            ..Default::default()
        };
        assert!(build_items(&draft).is_err());
    }

    #[test]
    fn build_items_rejects_zero_quantity() {
        let draft = OrderDraft {
            items: vec![draft_item("espresso", &[], 0)],
            ..Default::default()
        };
        assert!(build_items(&draft).is_err());
    }

    #[test]
    fn prep_time_scales_with_quantity() {
        let draft = OrderDraft {
            // latte 4 min, espresso 2 min x2
            items: vec![draft_item("latte", &[], 1), draft_item("espresso", &[], 2)],
            ..Default::default()
        };
        let items = build_items(&draft).unwrap();
        assert_eq!(estimated_prep_seconds(&items), 4 * 60 + 2 * 60 * 2);
    }
}
