use thiserror::Error;

use crate::integration::Service;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("{0} integration not enabled")]
    IntegrationDisabled(Service),
    #[error("{0} integration has no credentials configured")]
    MissingCredentials(Service),
}
