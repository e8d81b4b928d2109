use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

const TOKEN_LIFETIME_HOURS: i64 = 24;
const SECRET_KEY: &str = "jwt_secret";

pub async fn issue_token(user_id: &str, username: &str) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp() as usize,
    };
    let secret = jwt_secret().await?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = jwt_secret().await?;
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(data.claims)
}

/// Signing secret, persisted in sys_settings. Generated on first use so the
/// same secret survives restarts and all issued tokens stay valid.
async fn jwt_secret() -> Result<String> {
    let conn = get_connection();

    let stored = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [SECRET_KEY.into()],
        ))
        .await?;
    if let Some(row) = stored {
        return Ok(row.try_get("", "value")?);
    }

    // 256 random bits, base64. The rng is !Send and must not live across
    // the insert below.
    let secret = {
        use base64::{engine::general_purpose, Engine as _};
        let mut rng = rand::thread_rng();
        let bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
        general_purpose::STANDARD.encode(&bytes)
    };

    let now = Utc::now().to_rfc3339();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            SECRET_KEY.into(),
            secret.clone().into(),
            "Auto-generated JWT signing secret".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await?;

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn require_send<T: Send>(_: T) {}

    // Axum handlers need Send futures; the middleware and login both await
    // these.
    #[test]
    fn token_futures_are_send() {
        require_send(issue_token("u1", "admin"));
        require_send(validate_token("token"));
    }
}
