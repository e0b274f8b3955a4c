//! Chat panel state: transcript, input buffer and the single-flight loading flag.

use crate::models::ChatMessage;

use super::{Backend, ClientError};

/// Assistant message shown when the chat call fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// The chat widget's state for one session. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    input: String,
    loading: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// True while a chat call is outstanding; input is disabled meanwhile.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a send from the input buffer.
    ///
    /// Returns `None` without touching any state when the input is blank or a call
    /// is already outstanding. Otherwise appends the user message, clears the input,
    /// sets loading and returns the text to send.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Complete the outstanding send with the backend's result.
    pub fn finish_send(&mut self, result: Result<String, ClientError>) {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(reply));
        self.loading = false;
    }

    /// Send the current input and wait for the reply. Returns false if the send was a no-op.
    pub async fn send_message(&mut self, backend: &dyn Backend) -> bool {
        let Some(text) = self.begin_send() else {
            return false;
        };

        let result = backend.send_chat(&text).await;
        self.finish_send(result);
        true
    }
}
