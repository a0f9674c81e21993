use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: semver::Error,
    },
}

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("Empty version range")]
    Empty,

    #[error("Unsupported version range '{input}': {source}")]
    Unsupported {
        input: String,
        #[source]
        source: VersionError,
    },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
