use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use bawaba_config::DatabaseConfig;
use bawaba_db::DbConnectionConfig;

/// Build database connection config from application config.
///
/// A configured sqlite path wins; otherwise a server URL is composed from
/// the driver/host/credentials sections, with `BAWABA_DATABASE_URL` and
/// friends as the environment fallback.
pub fn database_config_from_config(cfg: &bawaba_config::Config) -> DbConnectionConfig {
    match cfg.database.driver.as_str() {
        "postgres" => DbConnectionConfig::new(server_url("postgres", &cfg.database, 5432)),
        "mysql" => DbConnectionConfig::new(server_url("mysql", &cfg.database, 3306)),
        _ => {
            if let Some(path) = &cfg.database.path {
                return DbConnectionConfig::new(path);
            }
            match DbConnectionConfig::from_env("BAWABA") {
                Ok(config) => config,
                Err(error) => {
                    tracing::warn!(%error, "falling back to in-memory sqlite database");
                    DbConnectionConfig::new("sqlite::memory:")
                }
            }
        }
    }
}

fn server_url(scheme: &str, db: &DatabaseConfig, default_port: u16) -> String {
    let host = db.host.as_deref().unwrap_or("localhost");
    let port = db.port.unwrap_or(default_port);
    let name = db.database.as_deref().unwrap_or("bawaba");
    match (db.username.as_deref(), db.password.as_deref()) {
        (Some(user), Some(pass)) => format!("{scheme}://{user}:{pass}@{host}:{port}/{name}"),
        (Some(user), None) => format!("{scheme}://{user}@{host}:{port}/{name}"),
        _ => format!("{scheme}://{host}:{port}/{name}"),
    }
}

/// Parse host:port into a SocketAddr, with fallback to 0.0.0.0.
pub fn parse_bind_address(host: &str, port: u16) -> SocketAddr {
    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .or_else(|_| host.parse::<SocketAddr>())
        .or_else(|_| {
            host.parse::<Ipv6Addr>()
                .map(|ip| SocketAddr::new(IpAddr::V6(ip), port))
        })
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_path_wins() {
        let mut cfg = bawaba_config::Config::default();
        cfg.database.path = Some("auth.sqlite".into());
        let db = database_config_from_config(&cfg);
        assert_eq!(db.url, "auth.sqlite");
    }

    #[test]
    fn postgres_url_composition() {
        let mut cfg = bawaba_config::Config::default();
        cfg.database.driver = "postgres".into();
        cfg.database.host = Some("db.internal".into());
        cfg.database.database = Some("accounts".into());
        cfg.database.username = Some("svc".into());
        cfg.database.password = Some("pw".into());
        let db = database_config_from_config(&cfg);
        assert_eq!(db.url, "postgres://svc:pw@db.internal:5432/accounts");
    }

    #[test]
    fn bind_address_fallback() {
        let addr = parse_bind_address("not a host name", 8080);
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        let addr = parse_bind_address("127.0.0.1", 9000);
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }
}
