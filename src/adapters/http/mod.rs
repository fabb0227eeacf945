// Outbound HTTP: one load-balanced primitive, two call-site strategies on top.

pub mod load_balanced;
pub mod order_client;

pub use load_balanced::LoadBalancedClient;
pub use order_client::{
    build_order_client, DeclarativeOrderClient, TemplateOrderClient, GET_ORDER, ORDERS_TEMPLATE,
};
