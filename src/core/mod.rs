// Request handlers for both services, written against the domain ports only.

pub mod aggregation;
pub mod order_lookup;
