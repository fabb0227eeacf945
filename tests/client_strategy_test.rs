//! The two order client strategies against a mocked order-service.

use customer_join::adapters::http::{
    build_order_client, DeclarativeOrderClient, LoadBalancedClient, TemplateOrderClient,
};
use customer_join::{
    seed_customers, ClientStrategy, CustomerAggregator, OrderClient, StaticRegistry,
};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn lb_client(instances: &[String], timeout: Duration) -> Arc<LoadBalancedClient> {
    let registry = StaticRegistry::new()
        .register("order-service", instances)
        .unwrap();
    Arc::new(LoadBalancedClient::new(Arc::new(registry), timeout).unwrap())
}

#[tokio::test]
async fn test_strategies_send_identical_requests() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/orders")
            .query_param("customerId", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "details": "Grilled Chicken Sandwich",
                "occurredAt": "2024-05-01T11:00:00Z"
            }));
    });

    let lb = lb_client(&[server.base_url()], Duration::from_secs(2));
    let declarative = DeclarativeOrderClient::new(lb.clone(), "order-service");
    let template = TemplateOrderClient::new(lb, "order-service");

    let from_declarative = declarative.fetch_order(1).await;
    let from_template = template.fetch_order(1).await;

    mock.assert_hits(2);
    assert!(from_declarative.is_some());
    assert_eq!(from_declarative, from_template);
}

#[tokio::test]
async fn test_strategies_agree_on_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(502);
    });

    let lb = lb_client(&[server.base_url()], Duration::from_secs(2));
    for strategy in [ClientStrategy::Declarative, ClientStrategy::Template] {
        let client = build_order_client(strategy, lb.clone(), "order-service");
        assert!(client.fetch_order(1).await.is_none(), "{:?}", strategy);
    }
}

#[tokio::test]
async fn test_round_robin_across_instances() {
    let first = MockServer::start();
    let second = MockServer::start();

    let first_mock = first.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(200).json_body(serde_json::json!({"details": "from first"}));
    });
    let second_mock = second.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(200).json_body(serde_json::json!({"details": "from second"}));
    });

    let lb = lb_client(
        &[first.base_url(), second.base_url()],
        Duration::from_secs(2),
    );
    let client = TemplateOrderClient::new(lb, "order-service");

    let mut details = Vec::new();
    for _ in 0..4 {
        details.push(client.fetch_order(1).await.unwrap().details);
    }

    first_mock.assert_hits(2);
    second_mock.assert_hits(2);
    assert_eq!(
        details,
        vec!["from first", "from second", "from first", "from second"]
    );
}

#[tokio::test]
async fn test_slow_upstream_does_not_fail_customer_lookup() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({"details": "Too late"}));
    });

    let lb = lb_client(&[server.base_url()], Duration::from_millis(200));
    let orders = build_order_client(ClientStrategy::Declarative, lb, "order-service");
    let aggregator = CustomerAggregator::new(Arc::new(seed_customers()), orders);

    let customer = aggregator.get_customer(1).await.unwrap();
    assert_eq!(customer.name, "Paul Molive");
    assert!(customer.order.is_none());
}

#[tokio::test]
async fn test_unknown_customer_never_calls_upstream() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(200).json_body(serde_json::json!({"details": "unused"}));
    });

    let lb = lb_client(&[server.base_url()], Duration::from_secs(2));
    let orders = build_order_client(ClientStrategy::Template, lb, "order-service");
    let aggregator = CustomerAggregator::new(Arc::new(seed_customers()), orders);

    assert!(aggregator.get_customer(99).await.is_err());
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_legacy_order_timestamp_is_kept() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/orders")
            .query_param("customerId", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"details":"Roasted Duck Breast","time":"2024-05-01T11:30:00.123"}"#);
    });

    let lb = lb_client(&[server.base_url()], Duration::from_secs(2));
    for strategy in [ClientStrategy::Declarative, ClientStrategy::Template] {
        let orders = build_order_client(strategy, lb.clone(), "order-service");
        let aggregator = CustomerAggregator::new(Arc::new(seed_customers()), orders);

        let customer = aggregator.get_customer(2).await.unwrap();
        let order = customer.order.expect("order should be attached");
        assert_eq!(order.details, "Roasted Duck Breast");

        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["occurredAt"], "2024-05-01T11:30:00.123Z");
    }
}
