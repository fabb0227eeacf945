use crate::adapters::http::load_balanced::LoadBalancedClient;
use crate::domain::model::Order;
use crate::domain::ports::{ClientStrategy, OrderClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;
use url::form_urlencoded;
use url::Url;

/// 宣告式的請求定義：路徑與查詢參數只寫一次
#[derive(Debug, Clone, Copy)]
pub struct GetMapping {
    pub path: &'static str,
    pub query_param: &'static str,
}

impl GetMapping {
    pub fn logical_url(&self, service: &str, value: impl Display) -> Result<Url> {
        let mut url = Url::parse(&format!("http://{}{}", service, self.path))?;
        url.query_pairs_mut()
            .append_pair(self.query_param, &value.to_string());
        Ok(url)
    }
}

pub const GET_ORDER: GetMapping = GetMapping {
    path: "/orders",
    query_param: "customerId",
};

pub const ORDERS_TEMPLATE: &str = "http://{service}/orders?customerId={customerId}";

/// Replaces each `{name}` placeholder with the URL-encoded value.
pub fn expand_template(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |uri, (name, value)| {
        let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
        uri.replace(&format!("{{{}}}", name), &encoded)
    })
}

pub struct DeclarativeOrderClient {
    client: Arc<LoadBalancedClient>,
    service: String,
}

impl DeclarativeOrderClient {
    pub fn new(client: Arc<LoadBalancedClient>, service: impl Into<String>) -> Self {
        Self {
            client,
            service: service.into(),
        }
    }

    pub async fn get_order(&self, customer_id: i64) -> Result<Option<Order>> {
        let url = GET_ORDER.logical_url(&self.service, customer_id)?;
        self.client.get_for_object(&url).await
    }
}

#[async_trait]
impl OrderClient for DeclarativeOrderClient {
    async fn fetch_order(&self, customer_id: i64) -> Option<Order> {
        advisory(&self.service, customer_id, self.get_order(customer_id).await)
    }
}

pub struct TemplateOrderClient {
    client: Arc<LoadBalancedClient>,
    service: String,
    template: String,
}

impl TemplateOrderClient {
    pub fn new(client: Arc<LoadBalancedClient>, service: impl Into<String>) -> Self {
        let service = service.into();
        let template = ORDERS_TEMPLATE.replace("{service}", &service);
        Self {
            client,
            service,
            template,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub async fn get_for_order(&self, customer_id: i64) -> Result<Option<Order>> {
        let uri = expand_template(&self.template, &[("customerId", customer_id.to_string())]);
        let url = Url::parse(&uri)?;
        self.client.get_for_object(&url).await
    }
}

#[async_trait]
impl OrderClient for TemplateOrderClient {
    async fn fetch_order(&self, customer_id: i64) -> Option<Order> {
        advisory(
            &self.service,
            customer_id,
            self.get_for_order(customer_id).await,
        )
    }
}

// 上游失敗一律視為「沒有訂單」，只在日誌中區分原因
fn advisory(service: &str, customer_id: i64, result: Result<Option<Order>>) -> Option<Order> {
    match result {
        Ok(Some(order)) => Some(order),
        Ok(None) => {
            tracing::debug!(
                "No order returned by '{}' for customer {}",
                service,
                customer_id
            );
            None
        }
        Err(e) => {
            tracing::warn!(
                "⚠️ Order lookup via '{}' failed for customer {}, continuing without order: {}",
                service,
                customer_id,
                e
            );
            None
        }
    }
}

pub fn build_order_client(
    strategy: ClientStrategy,
    client: Arc<LoadBalancedClient>,
    service: &str,
) -> Arc<dyn OrderClient> {
    match strategy {
        ClientStrategy::Declarative => Arc::new(DeclarativeOrderClient::new(client, service)),
        ClientStrategy::Template => Arc::new(TemplateOrderClient::new(client, service)),
    }
}
