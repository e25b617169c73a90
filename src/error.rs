use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The page fetch failed.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// The fetched body could not be turned into text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read html: {0}")]
    Read(#[from] std::io::Error),
}

/// The chat completion call failed.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("api error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Parse(String),

    #[error("model returned no answer")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Retrieval,
    Extraction,
    Inference,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Retrieval => "retrieval",
            Stage::Extraction => "extraction",
            Stage::Inference => "inference",
        };
        f.write_str(name)
    }
}

/// First failure of a single deadline check, tagged with the stage it came from.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("extraction failed: {0}")]
    Parse(#[from] ParseError),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

impl CheckError {
    /// The message followed by every cause in the source chain, skipping
    /// causes whose text is already part of the message.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = std::error::Error::source(cause);
        }
        message
    }

    pub fn stage(&self) -> Stage {
        match self {
            CheckError::Retrieval(_) => Stage::Retrieval,
            CheckError::Parse(_) => Stage::Extraction,
            CheckError::Inference(_) => Stage::Inference,
        }
    }
}
