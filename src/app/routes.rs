//! HTTP surface of both services, built on axum.
//!
//! ## Routes
//!
//! customer service:
//! - `GET /customers/{id}`: 200 with `{id, name, order?}` or 404 with an empty body.
//!
//! order service:
//! - `GET /orders?customerId={id}`: 200 with `{details, occurredAt?}` or 404.
//!
//! Both expose `GET /health`. No route requires authentication.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::core::aggregation::CustomerAggregator;
use crate::core::order_lookup::OrderLookup;
use crate::domain::model::{Customer, Order};
use crate::domain::ports::LookupStore;
use crate::utils::error::Result;

pub const CUSTOMER_SERVICE: &str = "customer-service";
pub const ORDER_SERVICE: &str = "order-service";

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
}

pub fn customer_router<S>(aggregator: Arc<CustomerAggregator<S>>) -> Router
where
    S: LookupStore<Customer> + 'static,
{
    Router::new()
        .route("/health", get(|| health(CUSTOMER_SERVICE)))
        .route("/customers/{id}", get(get_customer::<S>))
        .with_state(aggregator)
}

pub fn order_router<S>(lookup: Arc<OrderLookup<S>>) -> Router
where
    S: LookupStore<Order> + 'static,
{
    Router::new()
        .route("/health", get(|| health(ORDER_SERVICE)))
        .route("/orders", get(get_customer_orders::<S>))
        .with_state(lookup)
}

/// Serve a router on `0.0.0.0:{port}` until the process exits.
pub async fn serve(app: Router, port: u16) -> std::result::Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn health(service: &'static str) -> impl IntoResponse {
    Json(json!({ "ok": true, "service": service }))
}

async fn get_customer<S>(
    State(aggregator): State<Arc<CustomerAggregator<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>>
where
    S: LookupStore<Customer> + 'static,
{
    let customer = aggregator.get_customer(id).await?;
    Ok(Json(customer))
}

async fn get_customer_orders<S>(
    State(lookup): State<Arc<OrderLookup<S>>>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Order>>
where
    S: LookupStore<Order> + 'static,
{
    let order = lookup.get_customer_order(query.customer_id)?;
    Ok(Json(order))
}
