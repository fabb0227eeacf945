use crate::config::{validate_provider, DEFAULT_ORDER_SERVICE, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::ports::{ClientStrategy, ConfigProvider};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_instances, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logical service name -> instance base URLs
    #[serde(default)]
    pub registry: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub service_name: Option<String>,
    pub strategy: Option<ClientStrategy>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ServiceError::ConfigError {
            message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORDER_SERVICE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_provider(self)?;

        for (service, instances) in &self.registry {
            validate_instances(&format!("registry.{}", service), instances)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn port(&self) -> u16 {
        self.server.port
    }

    fn order_service_name(&self) -> &str {
        self.upstream
            .service_name
            .as_deref()
            .unwrap_or(DEFAULT_ORDER_SERVICE)
    }

    fn order_service_instances(&self) -> &[String] {
        let name = self.order_service_name();
        self.registry
            .iter()
            .find(|(service, _)| service.eq_ignore_ascii_case(name))
            .map(|(_, instances)| instances.as_slice())
            .unwrap_or(&[])
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upstream
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    fn client_strategy(&self) -> ClientStrategy {
        self.upstream.strategy.unwrap_or_default()
    }

    fn registry_entries(&self) -> Vec<(&str, &[String])> {
        self.registry
            .iter()
            .map(|(service, instances)| (service.as_str(), instances.as_slice()))
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[server]
port = 8080

[upstream]
service_name = "order-service"
strategy = "template"
timeout_seconds = 3

[registry]
order-service = ["http://10.0.0.1:8081", "http://10.0.0.2:8081"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.port(), 8080);
        assert_eq!(config.order_service_name(), "order-service");
        assert_eq!(config.order_service_instances().len(), 2);
        assert_eq!(config.client_strategy(), ClientStrategy::Template);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_upstream_defaults() {
        let toml_content = r#"
[server]
port = 8080

[registry]
order-service = ["http://localhost:8081"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.order_service_name(), "order-service");
        assert_eq!(config.client_strategy(), ClientStrategy::Declarative);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ORDER_SERVICE_URL", "http://orders.internal:8081");

        let toml_content = r#"
[server]
port = 8080

[registry]
order-service = ["${TEST_ORDER_SERVICE_URL}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.order_service_instances().to_vec(),
            vec!["http://orders.internal:8081".to_string()]
        );

        std::env::remove_var("TEST_ORDER_SERVICE_URL");
    }

    #[test]
    fn test_unset_env_var_is_kept_and_rejected() {
        let toml_content = r#"
[server]
port = 8080

[registry]
order-service = ["${SURELY_NOT_SET_ORDER_URL}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.order_service_instances().to_vec(),
            vec!["${SURELY_NOT_SET_ORDER_URL}".to_string()]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let missing_instances = r#"
[server]
port = 8080

[upstream]
service_name = "order-service"
"#;
        let config = TomlConfig::from_toml_str(missing_instances).unwrap();
        assert!(config.validate().is_err());

        let bad_other_service = r#"
[server]
port = 8080

[registry]
order-service = ["http://localhost:8081"]
billing-service = ["invalid-url"]
"#;
        let config = TomlConfig::from_toml_str(bad_other_service).unwrap();
        assert!(config.validate().is_err());

        let zero_port = r#"
[server]
port = 0

[registry]
order-service = ["http://localhost:8081"]
"#;
        let config = TomlConfig::from_toml_str(zero_port).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_registry_entries_include_every_service() {
        let toml_content = r#"
[server]
port = 8080

[upstream]
service_name = "ORDER-SERVICE"

[registry]
order-service = ["http://localhost:8081"]
billing-service = ["http://localhost:8082", "http://localhost:8083"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.order_service_instances().len(), 1);

        let mut entries = config.registry_entries();
        entries.sort();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "billing-service");
        assert_eq!(entries[0].1.len(), 2);
        assert_eq!(entries[1].0, "order-service");
    }

    #[test]
    fn test_unknown_strategy_fails_to_parse() {
        let toml_content = r#"
[server]
port = 8080

[upstream]
strategy = "grpc"
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, ServiceError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
port = 9191

[registry]
order-service = ["http://localhost:8081"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 9191);
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ServiceError::ConfigError { .. }));
    }
}
