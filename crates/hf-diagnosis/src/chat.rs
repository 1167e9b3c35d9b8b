//! The conversational assistant.

use hf_config::TransmissionScope;
use hf_core::entities::ChatMessage;
use hf_gateway::AiGateway;

/// Opening model turn of every conversation.
pub const GREETING: &str =
    "Olá! Sou o EletroBot. Qual eletrodoméstico está te dando dor de cabeça hoje?";

/// Model turn appended when the gateway fails.
pub const FALLBACK_REPLY: &str =
    "Desculpe, tive um problema técnico na minha placa lógica. Pode repetir?";

/// Owns one conversation. History lives only as long as the assistant.
pub struct ChatAssistant<G> {
    gateway: G,
    scope: TransmissionScope,
    history: Vec<ChatMessage>,
}

impl<G: AiGateway> ChatAssistant<G> {
    pub fn new(gateway: G, scope: TransmissionScope) -> Self {
        Self {
            gateway,
            scope,
            history: vec![ChatMessage::model(GREETING)],
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub const fn scope(&self) -> TransmissionScope {
        self.scope
    }

    /// Append `text` as a user turn and the assistant's answer as a model turn,
    /// returning the model turn. A gateway failure is logged and answered with
    /// [`FALLBACK_REPLY`].
    ///
    /// Blank input is ignored and yields `None` with the history untouched.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.history.push(ChatMessage::user(text));

        let reply = match self.gateway.chat(&self.history, self.scope).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, scope = %self.scope, "chat reply failed");
                FALLBACK_REPLY.to_string()
            }
        };
        self.history.push(ChatMessage::model(reply));
        self.history.last()
    }

    /// Drop the conversation back to the greeting.
    pub fn reset(&mut self) {
        self.history.truncate(1);
    }
}
