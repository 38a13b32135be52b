//! Feishu Bitable destination integration
//!
//! Tenant-token acquisition, the known-identifier lister, and the chunked
//! batch writer for the destination table.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::TenantTokenProvider;
pub use client::BitableClient;
