//! External service integrations

pub mod bitable;
pub mod getnotes;

pub use bitable::{BitableClient, TenantTokenProvider};
pub use getnotes::GetNotesClient;
