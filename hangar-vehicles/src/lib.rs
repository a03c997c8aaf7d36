use async_trait::async_trait;

/// HTTP client for the vehicle API.
pub mod client;
/// Static display-name tables for vehicle and weapon keys.
pub mod dictionary;
/// Field normalization applied to raw API records.
pub mod normalize;
/// Vehicle record model and raw wire shapes.
pub mod record;

pub use client::VehicleClient;
pub use reqwest::StatusCode;
pub use record::{BattleRatings, VehicleRecord};

/// Failure modes of a vehicle lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The search matched nothing or the id is unknown.
    #[error("no vehicle matched the lookup")]
    NotFound,
    #[error("vehicle api request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vehicle api returned status {0}")]
    Status(StatusCode),
    #[error("vehicle api returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Read-only source of vehicle data shared across interaction handlers.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Resolve a free-text vehicle name to matching vehicle identifiers.
    ///
    /// An empty match list is reported as [`LookupError::NotFound`].
    async fn lookup_ids_by_name(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Fetch and normalize a single vehicle record.
    async fn lookup_vehicle_by_id(&self, id: &str) -> Result<VehicleRecord, LookupError>;
}
