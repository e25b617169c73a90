use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// The raw response body of a fetched page.
pub type PageContent = Vec<u8>;

/// A previously recorded deadline to check against the live page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeadlineQuery {
    pub url: String,
    pub given_date: String,
}

impl DeadlineQuery {
    pub fn new(url: impl Into<String>, given_date: impl Into<String>) -> DeadlineQuery {
        DeadlineQuery {
            url: url.into(),
            given_date: given_date.into(),
        }
    }
}

/// What the model said about a recorded deadline.
///
/// `CorrectedDate` carries the model's answer verbatim. It is expected to be
/// `MM/DD/YYYY` or a start/end range, but nothing here enforces that; see
/// [`crate::validation`] for the advisory format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Confirmed,
    CorrectedDate(String),
}

impl VerificationResult {
    pub const CONFIRMATION_TOKEN: &'static str = "true";

    pub fn from_response(raw: &str) -> VerificationResult {
        let token = raw.trim().trim_matches(|c| c == '\'' || c == '"' || c == '`');
        if token.eq_ignore_ascii_case(Self::CONFIRMATION_TOKEN) {
            VerificationResult::Confirmed
        } else {
            VerificationResult::CorrectedDate(raw.to_string())
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, VerificationResult::Confirmed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerificationResult::Confirmed => Self::CONFIRMATION_TOKEN,
            VerificationResult::CorrectedDate(date) => date,
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one query in a batch.
#[derive(Debug)]
pub struct CheckOutcome {
    pub query: DeadlineQuery,
    pub result: std::result::Result<VerificationResult, CheckError>,
}

/// Grant pages the tool was originally pointed at.
pub fn default_queries() -> Vec<DeadlineQuery> {
    vec![
        DeadlineQuery::new(
            "https://www.farmtocafeteriacanada.ca/our-work/farm-to-school-grants/",
            "2/18/2022",
        ),
        DeadlineQuery::new(
            "https://www.nutritionnorthcanada.gc.ca/eng/1659529347875/1659529387998",
            "N/A",
        ),
        DeadlineQuery::new(
            "https://www.firstnations.org/projects/gather-food-sovereignty-grants/",
            "N/A",
        ),
        DeadlineQuery::new(
            "https://www.sac-isc.gc.ca/eng/1386530682712/1615722928307",
            "3/31/2024",
        ),
    ]
}

/// Reads a JSON array of `{"url": ..., "given_date": ...}` objects.
pub fn load_queries(path: &Path) -> Result<Vec<DeadlineQuery>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read query file {}", path.display()))?;
    let queries: Vec<DeadlineQuery> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse query file {}", path.display()))?;
    Ok(queries)
}
