use crate::domain::ports::ServiceResolver;
use crate::utils::error::{Result, ServiceError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// HTTP client that addresses upstreams by logical name.
///
/// Callers build URLs whose host is a service name
/// (`http://order-service/orders?customerId=1`); the host is swapped for an
/// instance picked by the [`ServiceResolver`] right before the request is sent.
pub struct LoadBalancedClient {
    http: Client,
    resolver: Arc<dyn ServiceResolver>,
}

impl LoadBalancedClient {
    pub fn new(resolver: Arc<dyn ServiceResolver>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, resolver })
    }

    /// 將邏輯 URL 轉成實際實例的 URL
    pub fn reconstruct(&self, logical: &Url) -> Result<Url> {
        let service = logical
            .host_str()
            .ok_or(ServiceError::UrlError(url::ParseError::EmptyHost))?;
        let endpoint = self.resolver.resolve(service)?;

        let mut target = endpoint.clone();
        let base_path = endpoint.path().trim_end_matches('/');
        target.set_path(&format!("{}{}", base_path, logical.path()));
        target.set_query(logical.query());
        Ok(target)
    }

    /// GET and deserialize a JSON body.
    ///
    /// `Ok(None)` means the upstream answered but had nothing: 404, 204, an
    /// empty body or a JSON `null`. Transport failures, other non-2xx statuses
    /// and malformed bodies are errors.
    pub async fn get_for_object<T: DeserializeOwned>(&self, logical: &Url) -> Result<Option<T>> {
        let service = logical.host_str().unwrap_or_default().to_string();
        let target = self.reconstruct(logical)?;

        tracing::debug!("GET {} (resolved to {})", logical, target);
        let response = self.http.get(target).send().await?;
        let status = response.status();
        tracing::debug!("Upstream '{}' response status: {}", service, status);

        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatusError {
                service,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<T>>(&body)?)
    }
}
