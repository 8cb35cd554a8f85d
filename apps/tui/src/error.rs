//! Error taxonomy for portal actions.
//!
//! Every failure is converted into a status banner at the action boundary
//! (search, comparison, export, initial load); nothing propagates past it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// Network or decoding failure while talking to the portal API.
    #[error("request to {endpoint} failed: {source}")]
    Fetch {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// An action was issued with invalid input, e.g. a comparison with
    /// fewer than two countries selected.
    #[error("{0}")]
    Validation(String),
}

impl PortalError {
    pub fn fetch(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            source,
        }
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
