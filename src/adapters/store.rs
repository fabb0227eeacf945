use crate::domain::model::{Customer, Order};
use crate::domain::ports::LookupStore;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// 啟動時建立的記憶體資料表，之後只讀
#[derive(Debug, Clone)]
pub struct InMemoryStore<V> {
    records: HashMap<i64, V>,
}

impl<V> InMemoryStore<V> {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (i64, V)>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<V: Send + Sync> LookupStore<V> for InMemoryStore<V> {
    fn lookup_by_id(&self, id: i64) -> Option<&V> {
        self.records.get(&id)
    }
}

pub type CustomerStore = InMemoryStore<Customer>;

/// Keyed by customer id, one order per customer.
pub type OrderStore = InMemoryStore<Order>;

pub fn seed_customers() -> CustomerStore {
    InMemoryStore::from_records(
        [
            Customer::new(1, "Paul Molive"),
            Customer::new(2, "Gail Forcewind"),
            Customer::new(3, "Paige Turner"),
        ]
        .into_iter()
        .map(|customer| (customer.id, customer)),
    )
}

pub fn seed_orders(now: DateTime<Utc>) -> OrderStore {
    InMemoryStore::from_records([
        (
            1,
            Order::new("Grilled Chicken Sandwich", Some(now - Duration::hours(1))),
        ),
        (
            2,
            Order::new("Roasted Duck Breast", Some(now - Duration::minutes(30))),
        ),
    ])
}
