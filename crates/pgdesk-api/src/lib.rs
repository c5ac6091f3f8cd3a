// pgdesk-api: Async Rust clients for the PG operator gateway microservices

pub mod auth;
pub mod error;
pub mod gateway;
pub mod notices;
pub mod rooms;
pub mod tenants;
pub mod tickets;
pub mod token;

pub use error::Error;
pub use gateway::GatewayClient;
pub use token::TokenHolder;
