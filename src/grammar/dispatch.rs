use super::{prompt::PromptRequest, profile::Profile};
use crate::{Error, Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, error};

/// Sends rendered prompts to the generation API.
pub struct Dispatcher {
    client: Arc<dyn LlmClient>,
    profile: Profile,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn LlmClient>, profile: Profile) -> Self {
        Self { client, profile }
    }

    /// Returns the model's reply, or the profile's failure message for the
    /// request's classification. Never fails.
    pub async fn generate(&self, request: &PromptRequest) -> String {
        match self.try_generate(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    classification = %request.classification,
                    input = %request.text,
                    "Generation failed: {}",
                    e
                );
                self.profile
                    .template(request.classification)
                    .render_failure(&request.text)
            }
        }
    }

    pub async fn try_generate(&self, request: &PromptRequest) -> Result<String> {
        let response = self
            .client
            .create_chat_completion(request.to_chat_request())
            .await?;

        if let Some(usage) = response.usage {
            debug!(
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        let reply = response
            .first_content()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(Error::EmptyCompletion)?;

        Ok(reply.to_string())
    }
}
