//! HTTP infrastructure - reqwest-backed API service

mod client;

pub use client::{HttpApiConfig, HttpApiService};
