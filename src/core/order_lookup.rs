use crate::domain::model::Order;
use crate::domain::ports::LookupStore;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;

/// The order service side of the join: `GET /orders?customerId={id}`.
pub struct OrderLookup<S> {
    orders: Arc<S>,
}

impl<S: LookupStore<Order>> OrderLookup<S> {
    pub fn new(orders: Arc<S>) -> Self {
        Self { orders }
    }

    pub fn get_customer_order(&self, customer_id: i64) -> Result<Order> {
        tracing::info!("getCustomerOrders with customerId {}", customer_id);
        self.orders
            .lookup_by_id(customer_id)
            .cloned()
            .ok_or(ServiceError::OrderNotFound { customer_id })
    }
}
