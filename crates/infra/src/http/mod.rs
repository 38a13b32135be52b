//! HTTP client infrastructure

pub mod client;

pub use client::{ApiResponse, HttpClient, HttpClientBuilder, ResponseBody};
