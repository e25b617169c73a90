use futures::stream::{self, StreamExt};

use crate::cleaner::extract_clean_text;
use crate::data_models::{CheckOutcome, DeadlineQuery, VerificationResult};
use crate::error::CheckError;
use crate::fetcher::PageFetcher;
use crate::llm::ChatModel;
use crate::verifier::DeadlineVerifier;

/// Runs fetch -> extract -> verify for deadline queries.
pub struct DeadlineChecker<F, M> {
    fetcher: F,
    verifier: DeadlineVerifier<M>,
}

impl<F, M> DeadlineChecker<F, M>
where
    F: PageFetcher,
    M: ChatModel,
{
    pub fn new(fetcher: F, model: M) -> Self {
        Self {
            fetcher,
            verifier: DeadlineVerifier::new(model),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn verifier(&self) -> &DeadlineVerifier<M> {
        &self.verifier
    }

    /// Stops at the first failing stage; later stages are not attempted.
    pub async fn check(&self, query: &DeadlineQuery) -> Result<VerificationResult, CheckError> {
        let url = &query.url;

        log::debug!("fetching {url}");
        let html = self.fetcher.fetch(url).await?;

        log::debug!("extracting text from {url}");
        let text = extract_clean_text(&html)?;

        log::debug!("verifying {url} against {}", query.given_date);
        let result = self.verifier.verify(&text, &query.given_date).await?;

        log::info!("checked {url}: {result}");
        Ok(result)
    }

    /// Checks every query with at most `concurrency` in flight. Outcomes come
    /// back in input order and a failure only affects its own query.
    pub async fn check_all(
        &self,
        queries: Vec<DeadlineQuery>,
        concurrency: usize,
    ) -> Vec<CheckOutcome> {
        stream::iter(queries)
            .map(|query| async move {
                let result = self.check(&query).await;
                if let Err(e) = &result {
                    log::error!("error checking {}, error: {}", query.url, e.report());
                }
                CheckOutcome { query, result }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
