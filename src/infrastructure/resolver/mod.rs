//! Outbound resolution of map URLs.

mod http_resolver;

pub use http_resolver::{HttpResolver, ResolverSettings};
