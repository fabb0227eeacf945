use crate::domain::ports::ServiceResolver;
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

fn service_key(service: &str) -> String {
    service.to_ascii_lowercase()
}

struct ServiceEntry {
    instances: Vec<Url>,
    cursor: AtomicUsize,
}

/// 靜態服務註冊表，以 round-robin 在實例間輪流分配
///
/// Service names are matched case-insensitively: logical URLs go through
/// `Url::parse`, which lowercases the host.
#[derive(Default)]
pub struct StaticRegistry {
    services: HashMap<String, ServiceEntry>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the instances of a logical service.
    pub fn register<I, S>(mut self, service: &str, instances: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let instances = instances
            .into_iter()
            .map(|raw| Url::parse(raw.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Registered {} instance(s) for service '{}'",
            instances.len(),
            service
        );

        self.services.insert(
            service_key(service),
            ServiceEntry {
                instances,
                cursor: AtomicUsize::new(0),
            },
        );
        Ok(self)
    }

    pub fn instance_count(&self, service: &str) -> usize {
        self.services
            .get(&service_key(service))
            .map(|entry| entry.instances.len())
            .unwrap_or(0)
    }
}

impl ServiceResolver for StaticRegistry {
    fn resolve(&self, service: &str) -> Result<Url> {
        let entry = self
            .services
            .get(&service_key(service))
            .filter(|entry| !entry.instances.is_empty())
            .ok_or_else(|| ServiceError::ServiceUnresolvedError {
                service: service.to_string(),
            })?;

        let index = entry.cursor.fetch_add(1, Ordering::Relaxed) % entry.instances.len();
        Ok(entry.instances[index].clone())
    }
}
