//! Username-keyed user lookup.
//!
//! The [`UserStore`] trait is the seam between request handlers and the
//! database: production code uses [`SqlUserStore`] over the shared pool,
//! tests can substitute any implementation.

use async_trait::async_trait;
use sqlx::Executor;
use thiserror::Error;

use crate::pool::DbPool;
use crate::DbBackend;

/// Stored credentials row for a single user.
///
/// The password column holds the stored comparison value verbatim. It is
/// intentionally not serializable; responses must never echo it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

/// Errors surfaced by a [`UserStore`] lookup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Lookup of exactly one user record by exact username match.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Find a user by username. The value is always bound as a query parameter,
/// never interpolated into the SQL text.
pub async fn find_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<UserRecord>, sqlx::Error>
where
    E: Executor<'e, Database = DbBackend>,
{
    sqlx::query_as::<_, UserRecord>("SELECT username, password FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await
}

/// [`UserStore`] backed by the shared SQLx pool. A connection is acquired
/// for the single lookup and released as soon as it completes.
#[derive(Clone)]
pub struct SqlUserStore {
    pool: DbPool,
}

impl SqlUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        find_by_username(&mut *conn, username)
            .await
            .map_err(Into::into)
    }
}
