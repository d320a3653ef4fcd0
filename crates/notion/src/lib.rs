//! Notion REST API client.
//!
//! A thin wrapper over the Notion database endpoints: enough to retrieve
//! a database's property schema for column classification. Pagination and
//! rate-limit handling are intentionally not implemented here.

pub mod client;
pub mod types;

pub use client::{NotionApi, NotionApiError};
pub use types::{Database, Property};
