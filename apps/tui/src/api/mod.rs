// Data fetch layer: typed models plus the HTTP client for the portal API.

pub mod client;
pub mod models;

pub use client::PortalClient;
