//! HTTP client module

pub mod client;
pub mod transport;

mod applications;
mod databases;
mod deployments;
mod projects;
mod resources;
mod security;
mod servers;
mod services;
mod system;

pub use client::{HttpClient, API_PREFIX};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};
