use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimationError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Divide by zero: {0}")]
    DivideByZero(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}
