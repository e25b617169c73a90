use crate::data_models::VerificationResult;
use crate::error::InferenceError;
use crate::llm::{ChatModel, ChatRequest, Message};

pub const SYSTEM_PROMPT: &str = "You are in charge of verifying the accuracy of an excel and you can only answer with the response that would go on the case of the excel sheet.";

/// User message asking the model to compare the page's deadline with `given_date`.
pub fn build_prompt(text_content: &str, given_date: &str) -> String {
    format!(
        "Given the text content:\n\n{text_content}\n\n\
         Is the current deadline for the grant the same as {given_date}? \
         If it is, return 'true'. If not, return the exact deadline date with this format ideally: MM/DD/YYYY \
         as it would appear in an Excel file. If there's a date range, provide the start and end dates."
    )
}

pub fn build_request(model: &str, text_content: &str, given_date: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_prompt(text_content, given_date)),
        ],
    }
}

pub struct DeadlineVerifier<M> {
    model: M,
}

impl<M: ChatModel> DeadlineVerifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// One chat completion per call. Output is not deterministic.
    pub async fn verify(
        &self,
        text_content: &str,
        given_date: &str,
    ) -> Result<VerificationResult, InferenceError> {
        if text_content.is_empty() {
            // Still sent; the answer for an empty page is best-effort.
            log::warn!("verifying deadline {given_date} against an empty page");
        }

        let request = build_request(self.model.model_name(), text_content, given_date);
        let answer = self.model.complete(request).await?;
        log::debug!("model answered {answer:?} for reference date {given_date}");

        Ok(VerificationResult::from_response(&answer))
    }
}
