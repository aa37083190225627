use std::env;

use crate::domain::ports::Endpoint;
use crate::utils::error::{ApiError, Result};

/// Configuration for the function deployment shape. The platform routes one
/// deployed function per endpoint, so the only thing to configure is which
/// endpoint this process answers as. No port is involved.
#[derive(Debug, Clone)]
pub struct FunctionConfig {
    pub endpoint: Endpoint,
}

impl FunctionConfig {
    pub fn from_env() -> Result<Self> {
        let name = env::var("PORTFOLIO_FUNCTION").map_err(|_| ApiError::ConfigError {
            message: "PORTFOLIO_FUNCTION environment variable is required".to_string(),
        })?;
        let endpoint = parse_endpoint(&name)?;
        Ok(Self { endpoint })
    }
}

fn parse_endpoint(name: &str) -> Result<Endpoint> {
    match name {
        "health" => Ok(Endpoint::Health),
        "projects" => Ok(Endpoint::Projects),
        "skills" => Ok(Endpoint::Skills),
        "contact" => Ok(Endpoint::Contact),
        other => Err(ApiError::InvalidConfigValueError {
            field: "PORTFOLIO_FUNCTION".to_string(),
            value: other.to_string(),
            reason: "Expected one of: health, projects, skills, contact".to_string(),
        }),
    }
}
