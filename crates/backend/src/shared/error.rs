use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid port override '{0}'")]
    Port(String),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
