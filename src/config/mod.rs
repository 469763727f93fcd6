use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub push: PushConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Sender identifier stamped on outbound push events (default: "unknown")
    pub sender: String,
    /// Push backend endpoint URL
    pub backend_url: String,
    /// Display name used in the welcome greeting
    pub service_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub redis_url: String,
    /// Key prefix for processed-user records (the "table" of the store)
    pub key_prefix: String,
    /// TTL for processed-user records in seconds (default: 86400 = 24h)
    pub record_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
            },
            push: PushConfig {
                sender: std::env::var("PUSH_EVENT_SENDER")
                    .unwrap_or_else(|_| "unknown".to_string()),
                backend_url: std::env::var("BACKEND_URL")?,
                service_name: std::env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "our community".to_string()),
            },
            store: StoreConfig {
                redis_url: std::env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
                key_prefix: std::env::var("STORE_KEY_PREFIX")
                    .unwrap_or_else(|_| "welcome:users".to_string()),
                record_ttl_secs: std::env::var("RECORD_TTL_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()?,
            },
        })
    }
}
