//! HTTP client layer — `TradexHttp`, one method per REST endpoint.

pub mod client;

pub use client::TradexHttp;
