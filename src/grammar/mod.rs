//! Classification of incoming text, prompt construction and dispatch to
//! the generation API.

mod classifier;
mod dispatch;
mod processor;
mod profile;
mod prompt;

pub use classifier::{Classification, MIN_VERB_LENGTH, classify};
pub use dispatch::Dispatcher;
pub use processor::TextProcessor;
pub use profile::{Profile, TaskTemplate};
pub use prompt::{PromptRequest, build_prompt};
