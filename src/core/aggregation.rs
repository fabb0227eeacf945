use crate::domain::model::Customer;
use crate::domain::ports::{LookupStore, OrderClient};
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;

/// Handles `GET /customers/{id}`: local lookup, advisory order lookup, merge.
pub struct CustomerAggregator<S> {
    customers: Arc<S>,
    orders: Arc<dyn OrderClient>,
}

impl<S: LookupStore<Customer>> CustomerAggregator<S> {
    pub fn new(customers: Arc<S>, orders: Arc<dyn OrderClient>) -> Self {
        Self { customers, orders }
    }

    pub async fn get_customer(&self, id: i64) -> Result<Customer> {
        tracing::info!("getCustomer with id {}", id);

        // 找不到客戶就直接回 404，不呼叫上游
        let customer = self
            .customers
            .lookup_by_id(id)
            .cloned()
            .ok_or(ServiceError::CustomerNotFound { id })?;

        let order = self.orders.fetch_order(id).await;
        tracing::debug!(
            "Customer {} enriched with order: {}",
            id,
            order.is_some()
        );

        Ok(customer.enrich(order))
    }
}
