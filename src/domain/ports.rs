use crate::domain::model::Order;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// 唯讀的 keyed lookup，找不到是正常結果不是錯誤
pub trait LookupStore<V>: Send + Sync {
    fn lookup_by_id(&self, id: i64) -> Option<&V>;
}

/// Resolves a logical service name (e.g. `order-service`) to the base URL of
/// one concrete instance.
pub trait ServiceResolver: Send + Sync {
    fn resolve(&self, service: &str) -> Result<Url>;
}

/// Advisory lookup of a customer's most recent order. Any upstream failure is
/// reported as `None`.
#[async_trait]
pub trait OrderClient: Send + Sync {
    async fn fetch_order(&self, customer_id: i64) -> Option<Order>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ClientStrategy {
    /// Request shape declared once, invoked as a method call
    #[default]
    Declarative,
    /// URI template expanded per call
    Template,
}

pub trait ConfigProvider: Send + Sync {
    fn port(&self) -> u16;
    fn order_service_name(&self) -> &str;
    fn order_service_instances(&self) -> &[String];
    fn request_timeout(&self) -> Duration;
    fn client_strategy(&self) -> ClientStrategy;

    /// Every logical service this process may call, with its instances.
    fn registry_entries(&self) -> Vec<(&str, &[String])> {
        vec![(self.order_service_name(), self.order_service_instances())]
    }
}
