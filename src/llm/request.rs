use crate::llm::ChatMessage;
use serde::Serialize;

/// Body of a `POST /chat/completions` call.
///
/// Fields serialize in declaration order, so the wire body always reads
/// `{"model":..,"messages":[..],"temperature":..}`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f64,
}

impl<'a> ChatRequest<'a> {
    pub fn new(messages: &'a [ChatMessage], model: &'a str, temperature: f64) -> Self {
        ChatRequest {
            model,
            messages,
            temperature,
        }
    }
}
