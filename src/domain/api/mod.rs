//! Remote API domain - endpoint descriptors and the request executor seam

mod endpoint;
mod service;

pub use endpoint::{Endpoint, HttpMethod};
pub use service::{ApiService, ApiServiceExt};

#[cfg(test)]
pub use service::MockApiService;
