use contracts::domain::a002_customer::Customer;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_customer")]
pub struct Model {
    /// Normalized phone number
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
            phone_number: m.phone_number,
            notes: m.notes,
        }
    }
}

fn to_active(c: &Customer) -> ActiveModel {
    ActiveModel {
        id: Set(c.id.clone()),
        name: Set(c.name.clone()),
        phone_number: Set(c.phone_number.clone()),
        notes: Set(c.notes.clone()),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    let models = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(customer: &Customer) -> anyhow::Result<()> {
    to_active(customer).insert(conn()).await?;
    Ok(())
}

pub async fn update(customer: &Customer) -> anyhow::Result<()> {
    to_active(customer).update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

/// Phone change means a new primary key. Insert-new + delete-old run in one
/// transaction so a failure can not leave both records behind.
pub async fn rename(old_id: &str, customer: &Customer) -> anyhow::Result<()> {
    let txn = conn().begin().await?;
    to_active(customer).insert(&txn).await?;
    Entity::delete_by_id(old_id.to_string()).exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}
