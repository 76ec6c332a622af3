use async_trait::async_trait;

use crate::db::{ConnectionProvider, DbError};
use crate::users::repo_types::{NewUser, User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection: {0}")]
    Connection(#[from] DbError),
    #[error("insert user: {0}")]
    Insert(#[source] sqlx::Error),
    #[error("database returned no generated id")]
    MissingId,
}

/// Persistence for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts one row and returns it with its generated id.
    async fn insert(&self, new_user: &NewUser) -> Result<User, StoreError>;
}

pub struct MySqlUserStore {
    provider: ConnectionProvider,
}

impl MySqlUserStore {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn insert(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let mut conn = self.provider.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, email)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password)
        .bind(&new_user.email)
        .execute(&mut *conn)
        .await
        .map_err(StoreError::Insert)?;

        match result.last_insert_id() {
            0 => Err(StoreError::MissingId),
            user_id => Ok(User::from_new(user_id, new_user)),
        }
    }
}
