pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "server")]
pub use crate::config::ServerConfig;

#[cfg(feature = "lambda")]
pub use crate::config::lambda::FunctionConfig;

pub use crate::core::catalog::Catalog;
pub use crate::core::handlers::PortfolioApi;
pub use crate::domain::ports::{ApiResponse, Endpoint, HttpMethod};
pub use crate::utils::error::{ApiError, Result};
