pub mod bootstrap;
pub mod routes;

pub use bootstrap::{build_customer_service, build_order_service, build_registry};
pub use routes::{customer_router, order_router, serve};
