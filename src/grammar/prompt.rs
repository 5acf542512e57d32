use super::{classifier::Classification, profile::Profile};
use crate::llm::{ChatCompletionRequest, ChatMessage};

/// A fully rendered request for the generation API.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub classification: Classification,
    pub text: String,
    pub system: String,
    pub instruction: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

pub fn build_prompt(profile: &Profile, classification: Classification, text: &str) -> PromptRequest {
    let text = text.trim();
    let template = profile.template(classification);

    PromptRequest {
        classification,
        text: text.to_string(),
        system: template.system.to_string(),
        instruction: template.render_instruction(text),
        max_tokens: template.max_tokens,
        temperature: profile.temperature,
    }
}

impl PromptRequest {
    pub fn to_chat_request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(self.system.clone()),
                ChatMessage::user(self.instruction.clone()),
            ],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        }
    }
}
