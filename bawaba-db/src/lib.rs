pub mod config;
pub mod error;
pub mod pool;
#[cfg(test)]
mod test;
pub mod users;
pub mod utils;

// Re-exports for public API
pub use config::DbConnectionConfig;
pub use error::DbConnectionError;
pub use pool::{create_pool, DbPool};
pub use users::{SqlUserStore, StoreError, UserRecord, UserStore};

#[cfg(not(any(feature = "postgres", feature = "mysql", feature = "sqlite")))]
compile_error!("Enable exactly one of the `postgres`, `mysql`, or `sqlite` features for bawaba-db.");

#[cfg(any(
    all(feature = "postgres", feature = "mysql"),
    all(feature = "postgres", feature = "sqlite"),
    all(feature = "mysql", feature = "sqlite"),
))]
compile_error!(
    "Activate only one backend feature (`postgres`, `mysql`, or `sqlite`) for bawaba-db."
);

#[cfg(feature = "postgres")]
pub type DbBackend = sqlx::Postgres;
#[cfg(feature = "mysql")]
pub type DbBackend = sqlx::MySql;
#[cfg(feature = "sqlite")]
pub type DbBackend = sqlx::Sqlite;
