use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADLENS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Parameters for the simulated source tables that back the dashboard
/// until a real metrics feed is wired in.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Seed for the mock-data generator; fixed so renders are reproducible.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_daily_rows")]
    pub daily_rows: usize,
    #[serde(default = "default_weekly_rows")]
    pub weekly_rows: usize,
}

fn default_node_id() -> String {
    "adlens-01".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_seed() -> u64 {
    42
}

fn default_daily_rows() -> usize {
    100
}

fn default_weekly_rows() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            daily_rows: default_daily_rows(),
            weekly_rows: default_weekly_rows(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADLENS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.http_port, 8080);
        assert_eq!(config.data.daily_rows, 100);
        assert_eq!(config.data.weekly_rows, 10);
    }
}
