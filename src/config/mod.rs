#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "server")]
use clap::Parser;

#[cfg(feature = "server")]
use crate::utils::error::Result;
#[cfg(feature = "server")]
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};

#[cfg(feature = "server")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-server")]
#[command(about = "JSON API backend for the portfolio site")]
pub struct ServerConfig {
    /// Port for the persistent-server deployment shape.
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Directory served for non-API routes.
    #[arg(long, default_value = "frontend")]
    pub static_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "server")]
impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("port", self.port as usize, 1)?;
        validate_non_empty_string("static_dir", &self.static_dir)?;
        Ok(())
    }
}
