use tracing::{error, info};
use twilight_model::http::interaction::InteractionResponse;

use super::embeds::build_vehicle_card;
use crate::CommandMeta;
use crate::event::InteractionEvent;
use hangar_core::{BotError, Context};
use hangar_utils::respond::{ReplyMode, content_response, embed_response};

pub const META: CommandMeta = CommandMeta {
    name: "info",
    desc: "Lookup vehicle info by ID",
    option: "id",
    option_desc: "Identification to lookup",
};

const INFO_FAILED_MESSAGE: &str = "An error occurred while trying to fetch vehicle info";

/// Look up one vehicle and reply with its info card.
///
/// `mode` is `NewMessage` for `/info` and `UpdateMessage` when a search
/// result button was clicked, replacing the grid with the card.
pub async fn run(
    ctx: &Context,
    event: &InteractionEvent,
    id: &str,
    mode: ReplyMode,
) -> InteractionResponse {
    match lookup_card(ctx, id, mode).await {
        Ok(response) => {
            info!("{} requested info for {}", event.username(), id);
            response
        }
        Err(BotError::NotFound) => content_response(format!("No vehicle found for ID {id}")),
        Err(err) => {
            error!(error = %err, %id, "vehicle info lookup failed");
            content_response(INFO_FAILED_MESSAGE)
        }
    }
}

async fn lookup_card(
    ctx: &Context,
    id: &str,
    mode: ReplyMode,
) -> Result<InteractionResponse, BotError> {
    let record = ctx.vehicles.lookup_vehicle_by_id(id).await?;
    let card = build_vehicle_card(&record)?;

    // Buttons are cleared so a replaced grid cannot be clicked again.
    Ok(embed_response(mode, vec![card], Vec::new()))
}
