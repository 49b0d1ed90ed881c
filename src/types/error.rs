use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanMapError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid grid extents: {0}")]
    InvalidExtents(String),
}
