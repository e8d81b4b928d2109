use chrono::{DateTime, Utc};
use contracts::domain::a001_order::{Order, OrderItem, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_name: String,
    pub customer_id: Option<String>,
    /// JSON-serialized Vec<OrderItem>
    pub items: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub total_price: i64,
    pub payment_method: String,
    pub estimated_prep_seconds: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Order {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_str(&m.items)?;
        let status = OrderStatus::parse(&m.status)
            .ok_or_else(|| anyhow::anyhow!("unknown order status '{}'", m.status))?;
        let payment_method = PaymentMethod::parse(&m.payment_method)
            .ok_or_else(|| anyhow::anyhow!("unknown payment method '{}'", m.payment_method))?;
        Ok(Order {
            id: m.id,
            customer_name: m.customer_name,
            customer_id: m.customer_id,
            items,
            status,
            created_at: m.created_at,
            completed_at: m.completed_at,
            total_price: m.total_price,
            payment_method,
            estimated_prep_seconds: m.estimated_prep_seconds,
        })
    }
}

fn to_active(order: &Order) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(order.id.clone()),
        customer_name: Set(order.customer_name.clone()),
        customer_id: Set(order.customer_id.clone()),
        items: Set(serde_json::to_string(&order.items)?),
        status: Set(order.status.as_str().to_string()),
        created_at: Set(order.created_at),
        completed_at: Set(order.completed_at),
        total_price: Set(order.total_price),
        payment_method: Set(order.payment_method.as_str().to_string()),
        estimated_prep_seconds: Set(order.estimated_prep_seconds),
    })
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(order: &Order) -> anyhow::Result<()> {
    to_active(order)?.insert(conn()).await?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    result.map(Order::try_from).transpose()
}

/// Orders still in preparation, oldest first. This is the tracker feed;
/// filtering happens in the query, not on the client.
pub async fn list_active() -> anyhow::Result<Vec<Order>> {
    let models = Entity::find()
        .filter(Column::Status.eq(OrderStatus::Preparing.as_str()))
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?;
    models.into_iter().map(Order::try_from).collect()
}

fn range_query(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    payment_method: Option<PaymentMethod>,
) -> Select<Entity> {
    let mut query = Entity::find()
        .filter(Column::CreatedAt.gte(from))
        .filter(Column::CreatedAt.lt(to));
    if let Some(pm) = payment_method {
        query = query.filter(Column::PaymentMethod.eq(pm.as_str()));
    }
    query.order_by_desc(Column::CreatedAt)
}

/// Orders created within [from, to), newest first, optionally restricted
/// to one payment method. Used by the daily dashboard.
pub async fn list_for_range(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    payment_method: Option<PaymentMethod>,
) -> anyhow::Result<Vec<Order>> {
    let models = range_query(from, to, payment_method).all(conn()).await?;
    models.into_iter().map(Order::try_from).collect()
}

/// Persist a status/items mutation done by the tracker
pub async fn update(order: &Order) -> anyhow::Result<()> {
    to_active(order)?.update(conn()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sea_orm::{DatabaseBackend, QueryTrait};

    #[test]
    fn range_query_restricts_to_one_payment_method() {
        let from = Utc.with_ymd_and_hms(2025, 6, 1, 21, 0, 0).unwrap();
        let to = from + chrono::Duration::days(1);

        let cash_only = range_query(from, to, Some(PaymentMethod::Cash))
            .build(DatabaseBackend::Sqlite)
            .to_string();
        // The predicate excludes card orders in the query itself
        assert!(cash_only.contains(r#""payment_method" = 'cash'"#));
        assert!(!cash_only.contains("'card'"));

        let all = range_query(from, to, None)
            .build(DatabaseBackend::Sqlite)
            .to_string();
        assert!(!all.contains("'cash'"));
        assert!(all.contains(r#""created_at""#));
    }
}
