use tracing::{error, info};
use twilight_model::http::interaction::InteractionResponse;

use crate::CommandMeta;
use crate::event::InteractionEvent;
use hangar_core::{BotError, Context};
use hangar_utils::pagination::{
    Choice, NavToken, PageView, SearchSession, SessionError, SessionKey, build_choice_view,
};
use hangar_utils::respond::{
    PAGINATION_EXPIRED_MESSAGE, PAGINATION_WRONG_USER_MESSAGE, ReplyMode, content_response,
    embed_response, ephemeral_response,
};
use hangar_vehicles::dictionary::vehicle_display_name;

pub const META: CommandMeta = CommandMeta {
    name: "search",
    desc: "Lookup vehicle info by common name",
    option: "vehicle",
    option_desc: "Vehicle to lookup",
};

const SEARCH_FAILED_MESSAGE: &str = "An error occurred while trying to fetch vehicle IDs";
const UNKNOWN_USER_MESSAGE: &str = "Unable to determine interaction user.";
const TITLE_PREFIX: &str = "Here are the vehicle IDs for ";
// Discord rejects embed titles longer than this many characters
const EMBED_TITLE_LIMIT: usize = 256;

/// Run a fresh search and post page 1 of the results as a new message.
///
/// Replaces any session previously started by the same interaction. An empty
/// result set replies with plain text and starts no session.
pub async fn run(ctx: &Context, event: &InteractionEvent, query: &str) -> InteractionResponse {
    match start_search(ctx, event, query).await {
        Ok(response) => response,
        Err(BotError::NotFound) => content_response(format!("No vehicle IDs found for {query}")),
        Err(err) => {
            error!(error = %err, %query, "vehicle search failed");
            content_response(SEARCH_FAILED_MESSAGE)
        }
    }
}

async fn start_search(
    ctx: &Context,
    event: &InteractionEvent,
    query: &str,
) -> Result<InteractionResponse, BotError> {
    let Some(owner_id) = event.author_id() else {
        return Ok(ephemeral_response(UNKNOWN_USER_MESSAGE));
    };

    let ids = ctx.vehicles.lookup_ids_by_name(query).await?;
    let session = SearchSession::new(query, &ids, owner_id).ok_or(BotError::NotFound)?;

    let key = SessionKey {
        channel_id: event.channel_id(),
        origin: event.id.get(),
    };

    // Render first so a failed page never leaves a session behind
    let response = render_page(&session.view(), key.origin, ReplyMode::NewMessage)?;
    ctx.sessions.start(key, session);
    info!("{} requested search for {}", event.username(), query);

    Ok(response)
}

/// Handle a previous/next click by re-rendering the stored session.
///
/// Never queries the vehicle API.
pub fn navigate(ctx: &Context, event: &InteractionEvent, token: NavToken) -> InteractionResponse {
    let Some(origin) = token.origin else {
        return ephemeral_response(PAGINATION_EXPIRED_MESSAGE);
    };
    let Some(actor_id) = event.author_id() else {
        return ephemeral_response(UNKNOWN_USER_MESSAGE);
    };

    let key = SessionKey {
        channel_id: event.channel_id(),
        origin,
    };

    match ctx.sessions.navigate(key, actor_id, token.direction) {
        Ok(view) => match render_page(&view, origin, ReplyMode::UpdateMessage) {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, query = %view.query, "failed to render search page");
                content_response(SEARCH_FAILED_MESSAGE)
            }
        },
        Err(SessionError::Expired) => ephemeral_response(PAGINATION_EXPIRED_MESSAGE),
        Err(SessionError::WrongUser) => ephemeral_response(PAGINATION_WRONG_USER_MESSAGE),
    }
}

fn render_page(
    view: &PageView,
    origin: u64,
    mode: ReplyMode,
) -> Result<InteractionResponse, BotError> {
    let choices: Vec<Choice> = view
        .ids
        .iter()
        .map(|id| Choice {
            label: vehicle_display_name(id),
            custom_id: id.clone(),
        })
        .collect();

    let title = search_title(&view.query);
    let (embed, components) =
        build_choice_view(&title, &choices, view.index, view.total_pages, origin)?;

    Ok(embed_response(mode, vec![embed], components))
}

/// Results title, with the query cut short to stay inside the embed title limit.
fn search_title(query: &str) -> String {
    let room = EMBED_TITLE_LIMIT - TITLE_PREFIX.chars().count();
    if query.chars().count() <= room {
        return format!("{TITLE_PREFIX}{query}");
    }

    let cut: String = query.chars().take(room - 1).collect();
    format!("{TITLE_PREFIX}{cut}…")
}
