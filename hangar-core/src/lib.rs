use std::sync::Arc;

use hangar_utils::pagination::SessionStore;
use hangar_vehicles::VehicleSource;

/// Error taxonomy shared by the router and the HTTP layer.
pub mod error;
/// Environment-driven runtime settings.
pub mod settings;

pub use error::BotError;
pub use settings::Settings;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub vehicles: Arc<dyn VehicleSource>,
    pub sessions: SessionStore,
}

impl Context {
    /// Create a new application context.
    pub fn new(vehicles: Arc<dyn VehicleSource>, sessions: SessionStore) -> Self {
        Self { vehicles, sessions }
    }
}
