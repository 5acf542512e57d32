use super::{
    classifier::{Classification, classify},
    dispatch::Dispatcher,
    profile::Profile,
    prompt::build_prompt,
};
use crate::llm::LlmClient;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Entry point for chat integrations: one call per received text message.
pub struct TextProcessor {
    profile: Profile,
    dispatcher: Dispatcher,
}

impl TextProcessor {
    pub fn new(client: Arc<dyn LlmClient>, profile: Profile) -> Self {
        Self {
            dispatcher: Dispatcher::new(client, profile.clone()),
            profile,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Always returns display-ready text; failures are already rendered.
    pub async fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return self.profile.empty_input.to_string();
        }

        let classification = classify(text);
        let span = info_span!(
            "process",
            request_id = %Uuid::new_v4(),
            classification = %classification
        );

        async {
            match classification {
                Classification::VerbForm => {
                    info!("Processing '{}' as a verb for conjugation", text)
                }
                Classification::Phrase => {
                    info!("Processing '{}' as a phrase for correction", text)
                }
            }

            let request = build_prompt(&self.profile, classification, text);
            self.dispatcher.generate(&request).await
        }
        .instrument(span)
        .await
    }
}
