use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Account role. Admin unlocks the content-management routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

/// A configured login account.
///
/// Credentials are compared in plain text; hardening the login flow is
/// explicitly out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum upload size in MB
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,

    /// FAQ snapshot file; omitted means a purely in-memory store
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Directory for uploaded repository files
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Login accounts (in production, use a database)
    #[serde(default)]
    pub users: Vec<UserConfig>,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_upload_mb: default_max_upload_mb(),
            data_file: None,
            uploads_dir: default_uploads_dir(),
            users: Vec::new(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("CAMPUS_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        // Install demo accounts if none configured (for development)
        if config.users.is_empty() {
            tracing::warn!(
                "No accounts configured, installing demo student/admin accounts"
            );
            config.users = Self::demo_users();
        }

        Ok(config)
    }

    /// The development accounts used when none are configured.
    pub fn demo_users() -> Vec<UserConfig> {
        vec![
            UserConfig {
                email: "student@college.com".to_string(),
                password: "student123".to_string(),
                role: Role::Student,
                name: "Rahul Kumar".to_string(),
            },
            UserConfig {
                email: "admin@college.com".to_string(),
                password: "admin123".to_string(),
                role: Role::Admin,
                name: "Admin User".to_string(),
            },
        ]
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max upload size in bytes
    pub fn max_upload_size(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4100
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_upload_mb() -> usize {
    10
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 4100);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_upload_mb, 10);
        assert!(cfg.enable_cors);
        assert!(cfg.data_file.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 4100);
    }

    #[test]
    fn demo_accounts_cover_both_roles() {
        let users = ServerConfig::demo_users();
        assert!(users.iter().any(|u| u.role == Role::Admin));
        assert!(users.iter().any(|u| u.role == Role::Student));
    }
}
