#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use deadline_checker::data_models::PageContent;
use deadline_checker::error::{InferenceError, RetrievalError};
use deadline_checker::fetcher::PageFetcher;
use deadline_checker::llm::{ChatModel, ChatRequest};
use reqwest::StatusCode;

/// Serves canned pages; unknown urls are a 404.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(html) => Ok(html.as_bytes().to_vec()),
            None => Err(RetrievalError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}

/// Answers every request with the same text and keeps what it was sent.
pub struct StubModel {
    answer: Result<String, ()>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl StubModel {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: Err(()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, request: ChatRequest) -> Result<String, InferenceError> {
        self.requests.lock().unwrap().push(request);
        match &self.answer {
            Ok(answer) => Ok(answer.clone()),
            Err(()) => Err(InferenceError::Api {
                status: StatusCode::UNAUTHORIZED,
                body: "invalid api key".to_string(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
