use contracts::domain::a002_customer::{Customer, CustomerDto};

use super::repository;

/// Create a new directory entry; the id is derived from the phone number.
pub async fn create(dto: CustomerDto) -> anyhow::Result<Customer> {
    let customer = Customer::from_dto(&dto);
    customer
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    if repository::get_by_id(&customer.id).await?.is_some() {
        anyhow::bail!("Клиент с таким номером телефона уже существует");
    }

    repository::insert(&customer).await?;
    Ok(customer)
}

/// Update an existing entry. A changed phone number moves the record to a
/// new id atomically (see repository::rename).
pub async fn update(dto: CustomerDto) -> anyhow::Result<Customer> {
    let old_id = dto
        .id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Missing customer id"))?;

    if repository::get_by_id(&old_id).await?.is_none() {
        anyhow::bail!("Клиент не найден");
    }

    let customer = Customer::from_dto(&dto);
    customer
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    if customer.id == old_id {
        repository::update(&customer).await?;
    } else {
        if repository::get_by_id(&customer.id).await?.is_some() {
            anyhow::bail!("Клиент с таким номером телефона уже существует");
        }
        repository::rename(&old_id, &customer).await?;
    }
    Ok(customer)
}

/// Delete an entry. Past orders keep their customer reference untouched.
pub async fn delete(id: &str) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Customer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    repository::list_all().await
}
