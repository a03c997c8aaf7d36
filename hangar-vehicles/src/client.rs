use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::record::RawVehicle;
use crate::{LookupError, VehicleRecord, VehicleSource};

/// Default base URL of the public War Thunder vehicles API.
pub const DEFAULT_BASE_URL: &str = "https://www.wtvehiclesapi.sgambe.serv00.net/api";

/// Shared handle to the vehicle API.
///
/// Cheap to clone; the inner `reqwest` client pools connections.
#[derive(Clone, Debug)]
pub struct VehicleClient {
    http: reqwest::Client,
    base_url: String,
}

impl VehicleClient {
    /// Create a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Ok(Self { http, base_url })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, name: &str) -> String {
        format!(
            "{}/vehicles/search/{}",
            self.base_url,
            urlencoding::encode(name.trim())
        )
    }

    fn vehicle_url(&self, id: &str) -> String {
        format!(
            "{}/vehicles/{}",
            self.base_url,
            urlencoding::encode(id.trim())
        )
    }

    /// GET `url`, mapping 404 to `NotFound` and other failures to upstream errors.
    async fn get_body(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        debug!(%url, "querying vehicle api");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl VehicleSource for VehicleClient {
    async fn lookup_ids_by_name(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let body = self.get_body(&self.search_url(name)).await?;
        parse_search_body(&body)
    }

    async fn lookup_vehicle_by_id(&self, id: &str) -> Result<VehicleRecord, LookupError> {
        let body = self.get_body(&self.vehicle_url(id)).await?;
        parse_vehicle_body(&body, id)
    }
}

/// Parse a search response. `null` and `[]` both mean nothing matched.
pub(crate) fn parse_search_body(body: &[u8]) -> Result<Vec<String>, LookupError> {
    let ids: Option<Vec<String>> = serde_json::from_slice(body)?;

    match ids {
        Some(ids) if !ids.is_empty() => Ok(ids),
        _ => Err(LookupError::NotFound),
    }
}

/// Parse and normalize a vehicle response. A `null` body means the id is unknown.
pub(crate) fn parse_vehicle_body(
    body: &[u8],
    requested_id: &str,
) -> Result<VehicleRecord, LookupError> {
    let raw: Option<RawVehicle> = serde_json::from_slice(body)?;

    raw.map(|raw| raw.into_record(requested_id))
        .ok_or(LookupError::NotFound)
}
