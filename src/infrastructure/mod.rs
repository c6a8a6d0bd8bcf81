//! Infrastructure layer - External service implementations

pub mod http;
pub mod logging;
pub mod search;
pub mod services;
pub mod storage;
