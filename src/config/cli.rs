use crate::config::validate_provider;
use crate::domain::ports::{ClientStrategy, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-service")]
#[command(about = "Customer lookup enriched with the latest order from order-service")]
pub struct CliConfig {
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Logical name of the order service
    #[arg(long, default_value = "order-service")]
    pub order_service_name: String,

    /// Instances of the order service, comma separated
    #[arg(long, value_delimiter = ',', default_value = "http://localhost:8081")]
    pub order_service_url: Vec<String>,

    #[arg(long, value_enum, default_value_t = ClientStrategy::Declarative)]
    pub client_strategy: ClientStrategy,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    /// TOML config file; replaces the service flags above when given
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn port(&self) -> u16 {
        self.port
    }

    fn order_service_name(&self) -> &str {
        &self.order_service_name
    }

    fn order_service_instances(&self) -> &[String] {
        &self.order_service_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn client_strategy(&self) -> ClientStrategy {
        self.client_strategy
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
