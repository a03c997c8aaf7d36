pub mod event;
pub mod registry;
pub mod vehicles;

use tracing::warn;
use twilight_model::{
    application::interaction::InteractionType, http::interaction::InteractionResponse,
};

use event::InteractionEvent;
use hangar_core::{BotError, Context};
use hangar_utils::pagination::{NavToken, parse_nav_custom_id};
use hangar_utils::respond::{ReplyMode, pong};

#[derive(Clone, Debug)]
enum InteractionRoute {
    Ping,
    Command(String),
    Navigate(NavToken),
    VehicleButton(String),
}

fn route_interaction(event: &InteractionEvent) -> Result<InteractionRoute, BotError> {
    match event.kind {
        InteractionType::Ping => Ok(InteractionRoute::Ping),
        InteractionType::ApplicationCommand => event
            .command_name()
            .map(|name| InteractionRoute::Command(name.to_ascii_lowercase()))
            .ok_or_else(|| BotError::UnrecognizedCommand("<missing command name>".to_owned())),
        InteractionType::MessageComponent => {
            let custom_id = event.custom_id().unwrap_or_default();
            if custom_id.is_empty() {
                return Err(BotError::UnrecognizedCommand(
                    "<missing component id>".to_owned(),
                ));
            }

            Ok(match parse_nav_custom_id(custom_id) {
                Some(token) => InteractionRoute::Navigate(token),
                None => InteractionRoute::VehicleButton(custom_id.to_owned()),
            })
        }
        other => Err(BotError::UnrecognizedCommand(format!(
            "interaction type {other:?}"
        ))),
    }
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    /// Name of the single required string option.
    pub option: &'static str,
    pub option_desc: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    vehicles::search::META,
    vehicles::info::META,
    // Add new commands here
];

/// Route one verified interaction to its handler and build the reply.
///
/// Lookup failures are turned into user-facing replies by the handlers; only
/// unrecognized commands surface as errors.
pub async fn handle_interaction(
    ctx: &Context,
    event: &InteractionEvent,
) -> Result<InteractionResponse, BotError> {
    let route = route_interaction(event).inspect_err(|err| {
        warn!(error = %err, interaction_id = event.id.get(), "unroutable interaction");
    })?;

    let response = match route {
        InteractionRoute::Ping => pong(),
        InteractionRoute::Command(name) => handle_command(ctx, event, &name).await?,
        InteractionRoute::Navigate(token) => vehicles::search::navigate(ctx, event, token),
        InteractionRoute::VehicleButton(id) => {
            vehicles::info::run(ctx, event, &id, ReplyMode::UpdateMessage).await
        }
    };

    Ok(response)
}

async fn handle_command(
    ctx: &Context,
    event: &InteractionEvent,
    name: &str,
) -> Result<InteractionResponse, BotError> {
    let meta = COMMANDS
        .iter()
        .find(|meta| meta.name == name)
        .ok_or_else(|| BotError::UnrecognizedCommand(name.to_owned()))?;

    let arg = event.option_value(meta.option).ok_or_else(|| {
        BotError::UnrecognizedCommand(format!("{name} without `{}`", meta.option))
    })?;

    let response = match meta.name {
        "search" => vehicles::search::run(ctx, event, &arg).await,
        "info" => vehicles::info::run(ctx, event, &arg, ReplyMode::NewMessage).await,
        // Add new commands here
        _ => return Err(BotError::UnrecognizedCommand(name.to_owned())),
    };

    Ok(response)
}
