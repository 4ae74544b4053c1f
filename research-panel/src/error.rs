use thiserror::Error;

/// Failure of a research service request. The display text of each variant
/// is what the panel shows to the user.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("API ERROR: {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),
}

/// Failure reported by a host capability
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Tab query failed: {0}")]
    TabQuery(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
