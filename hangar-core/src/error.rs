use hangar_utils::signature::SignatureError;
use hangar_vehicles::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Bad or missing request signature; rejected before any routing.
    #[error("request signature rejected: {0}")]
    AuthenticationFailure(#[from] SignatureError),
    /// Empty search or unknown vehicle id. Shown to the user as plain text.
    #[error("no matching vehicle")]
    NotFound,
    /// Network, status or decode failure talking to the vehicle API.
    #[error("vehicle lookup failed: {0}")]
    UpstreamFailure(#[source] LookupError),
    /// Unknown command name, interaction type or missing command option.
    #[error("unrecognized command `{0}`")]
    UnrecognizedCommand(String),
    /// A reply could not be built from fetched data.
    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

impl From<LookupError> for BotError {
    fn from(err: LookupError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::UpstreamFailure(err)
        }
    }
}
