//! API client module
//!
//! HTTP client for the g:Profiler GOSt profiling endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{GostClient, DEFAULT_API_URL};
pub use types::*;
