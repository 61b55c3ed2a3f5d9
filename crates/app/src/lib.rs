//! Application layer for the Renoovy+ storefront: use cases over the domain
//! crates, their DTOs, runtime configuration and dependency wiring.

pub mod config;
pub mod container;
pub mod dto;
pub mod error;
pub mod use_cases;

pub use config::AppConfig;
pub use container::AppContainer;
pub use error::{UseCaseError, UseCaseResult};
