//! Best-effort model of an inbound interaction webhook body.
//!
//! Only the fields the router reads are modelled; everything else Discord
//! sends is ignored.

use serde::Deserialize;
use serde_json::Value;
use twilight_model::{
    application::interaction::InteractionType,
    id::{
        Id,
        marker::{ChannelMarker, InteractionMarker, MessageMarker, UserMarker},
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionEvent {
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<EventData>,
    #[serde(default)]
    pub member: Option<EventMember>,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(default)]
    pub channel_id: Option<Id<ChannelMarker>>,
    #[serde(default)]
    pub channel: Option<EventChannel>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

/// Command or component payload; which fields are set depends on the event type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<EventOption>,
    #[serde(default)]
    pub custom_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventMember {
    #[serde(default)]
    pub user: Option<EventUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventUser {
    pub id: Id<UserMarker>,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventChannel {
    pub id: Id<ChannelMarker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    pub id: Id<MessageMarker>,
}

impl InteractionEvent {
    /// Invoking user: the guild member's user, or the DM user.
    pub fn author(&self) -> Option<&EventUser> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }

    pub fn author_id(&self) -> Option<u64> {
        self.author().map(|user| user.id.get())
    }

    /// Username for request logs.
    pub fn username(&self) -> &str {
        self.author()
            .map(|user| user.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("unknown user")
    }

    /// Channel the interaction happened in; `0` when Discord omitted it.
    pub fn channel_id(&self) -> u64 {
        self.channel_id
            .or_else(|| self.channel.as_ref().map(|channel| channel.id))
            .map_or(0, Id::get)
    }

    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref()?.name.as_deref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.data.as_ref()?.custom_id.as_deref()
    }

    /// Value of a command option as text. Numbers are stringified.
    pub fn option_value(&self, name: &str) -> Option<String> {
        let option = self
            .data
            .as_ref()?
            .options
            .iter()
            .find(|option| option.name == name)?;

        match option.value.as_ref()? {
            Value::String(value) => Some(value.trim().to_owned()).filter(|value| !value.is_empty()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}
