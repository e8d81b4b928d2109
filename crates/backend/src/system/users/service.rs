use anyhow::Result;
use chrono::Utc;

use super::repository::{self, User};
use crate::system::auth::password;

/// Create a new staff account
pub async fn create(username: &str, raw_password: &str, full_name: Option<String>) -> Result<String> {
    if username.trim().is_empty() {
        return Err(anyhow::anyhow!("Имя пользователя не может быть пустым"));
    }

    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Пользователь с таким именем уже существует"));
    }

    password::validate_password_strength(raw_password)?;
    let password_hash = password::hash_password(raw_password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: username.trim().to_string(),
        full_name,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Verify user credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        return Err(anyhow::anyhow!("Учетная запись отключена"));
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !crate::system::auth::password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&user.id).await;

    Ok(Some(user))
}
