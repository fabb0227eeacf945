pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::discovery::StaticRegistry;
pub use crate::adapters::http::{DeclarativeOrderClient, LoadBalancedClient, TemplateOrderClient};
pub use crate::adapters::store::{
    seed_customers, seed_orders, CustomerStore, InMemoryStore, OrderStore,
};
pub use crate::core::aggregation::CustomerAggregator;
pub use crate::core::order_lookup::OrderLookup;
pub use crate::domain::model::{Customer, Order, OrderSummary};
pub use crate::domain::ports::{
    ClientStrategy, ConfigProvider, LookupStore, OrderClient, ServiceResolver,
};
pub use crate::utils::error::{Result, ServiceError};
