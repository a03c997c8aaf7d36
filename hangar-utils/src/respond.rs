//! Shared interaction response builders.
//!
//! Every reply is a typed [`InteractionResponse`]; the HTTP layer serializes it.

use twilight_model::{
    channel::message::{MessageFlags, component::Component, embed::Embed},
    http::interaction::{InteractionResponse, InteractionResponseType},
};
use twilight_util::builder::InteractionResponseDataBuilder;

/// Generic message shown when a pagination interaction belongs to another user.
pub const PAGINATION_WRONG_USER_MESSAGE: &str = "This search belongs to another user.";
/// Generic message shown when a pagination session is gone.
pub const PAGINATION_EXPIRED_MESSAGE: &str = "This search expired. Run /search again.";

/// Whether a reply posts a new message or edits the one a component lives on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplyMode {
    /// Reply to a slash command.
    NewMessage,
    /// Reply to a component click on an existing message.
    UpdateMessage,
}

impl ReplyMode {
    pub fn response_type(self) -> InteractionResponseType {
        match self {
            Self::NewMessage => InteractionResponseType::ChannelMessageWithSource,
            Self::UpdateMessage => InteractionResponseType::UpdateMessage,
        }
    }
}

/// Acknowledge a liveness ping.
pub fn pong() -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::Pong,
        data: None,
    }
}

/// Reply with embeds and components.
///
/// An empty `components` list clears buttons from an updated message.
pub fn embed_response(
    mode: ReplyMode,
    embeds: Vec<Embed>,
    components: Vec<Component>,
) -> InteractionResponse {
    InteractionResponse {
        kind: mode.response_type(),
        data: Some(
            InteractionResponseDataBuilder::new()
                .embeds(embeds)
                .components(components)
                .build(),
        ),
    }
}

/// Reply with a plain-text message in the channel.
pub fn content_response(content: impl Into<String>) -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(InteractionResponseDataBuilder::new().content(content).build()),
    }
}

/// Reply with a plain-text message only the clicking user can see.
pub fn ephemeral_response(content: impl Into<String>) -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    }
}
