use std::sync::Arc;

use axum::Router;

use crate::adapters::discovery::StaticRegistry;
use crate::adapters::http::{build_order_client, LoadBalancedClient};
use crate::adapters::store::{CustomerStore, OrderStore};
use crate::app::routes::{customer_router, order_router};
use crate::core::aggregation::CustomerAggregator;
use crate::core::order_lookup::OrderLookup;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// 依設定組裝 customer service 的 router
pub fn build_customer_service<C>(config: &C, customers: CustomerStore) -> Result<Router>
where
    C: ConfigProvider + ?Sized,
{
    let registry = build_registry(config)?;

    let client = Arc::new(LoadBalancedClient::new(
        Arc::new(registry),
        config.request_timeout(),
    )?);
    let orders = build_order_client(config.client_strategy(), client, config.order_service_name());

    tracing::info!(
        "Order lookups go to '{}' via {:?} client ({} instance(s), timeout {:?})",
        config.order_service_name(),
        config.client_strategy(),
        config.order_service_instances().len(),
        config.request_timeout()
    );

    let aggregator = CustomerAggregator::new(Arc::new(customers), orders);
    Ok(customer_router(Arc::new(aggregator)))
}

/// 註冊設定中所有服務的實例
pub fn build_registry<C>(config: &C) -> Result<StaticRegistry>
where
    C: ConfigProvider + ?Sized,
{
    config
        .registry_entries()
        .into_iter()
        .try_fold(StaticRegistry::new(), |registry, (service, instances)| {
            registry.register(service, instances)
        })
}

pub fn build_order_service(orders: OrderStore) -> Router {
    tracing::info!("Order store loaded with {} order(s)", orders.len());
    order_router(Arc::new(OrderLookup::new(Arc::new(orders))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use crate::domain::ports::ServiceResolver;

    #[test]
    fn test_build_registry_registers_every_entry() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
port = 8080

[registry]
order-service = ["http://localhost:8081"]
billing-service = ["http://localhost:8082"]
"#,
        )
        .unwrap();

        let registry = build_registry(&config).unwrap();

        assert_eq!(registry.instance_count("order-service"), 1);
        assert_eq!(registry.instance_count("billing-service"), 1);
        assert_eq!(
            registry.resolve("billing-service").unwrap().as_str(),
            "http://localhost:8082/"
        );
    }

    #[test]
    fn test_build_registry_from_single_upstream() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
port = 8080

[upstream]
service_name = "ORDER-SERVICE"

[registry]
ORDER-SERVICE = ["http://localhost:8081"]
"#,
        )
        .unwrap();

        let registry = build_registry(&config).unwrap();
        assert!(registry.resolve("order-service").is_ok());
    }
}
