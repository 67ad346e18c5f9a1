use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm bundle)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Row count returned by `GET /api/sales/recent`
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u64,
    /// Fill an empty `sales` table with generated demo rows at start-up
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_recent_limit() -> u64 {
    10
}

fn default_seed_demo_data() -> bool {
    true
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8000
static_dir = "dist"

[database]
path = "target/db/sales.db"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the database file path from configuration.
/// Relative paths resolve against the executable directory.
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(db_path)))
        .unwrap_or_else(|| db_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/sales.db");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert_eq!(config.dashboard.recent_limit, 10);
        assert!(config.dashboard.seed_demo_data);
    }

    #[test]
    fn test_dashboard_section_overrides() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            static_dir = "build"

            [database]
            path = "/var/lib/salesdash/sales.db"

            [dashboard]
            recent_limit = 25
            seed_demo_data = false
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.recent_limit, 25);
        assert!(!config.dashboard.seed_demo_data);
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            get_database_path(&config),
            PathBuf::from("/var/lib/salesdash/sales.db")
        );
    }

    #[test]
    fn test_missing_server_section_is_rejected() {
        assert!(parse_config("[database]\npath = \"x.db\"\n").is_err());
    }

    #[test]
    fn test_bad_host_is_reported() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".to_string();
        assert!(config.server.socket_addr().is_err());
    }
}
