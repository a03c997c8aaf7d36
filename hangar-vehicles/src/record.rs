use serde::Deserialize;

use crate::dictionary::weapon_display_name;
use crate::normalize::{normalize_country, normalize_vehicle_type};

/// Battle ratings per game mode. Aircraft-only vehicles leave the ground modes empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BattleRatings {
    pub arcade: Option<f64>,
    pub realistic: Option<f64>,
    pub realistic_ground: Option<f64>,
    pub simulator: Option<f64>,
    pub simulator_ground: Option<f64>,
}

/// A vehicle as displayed to users, with display-ready country, type and weapon names.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    pub identifier: String,
    pub country: String,
    pub vehicle_type: String,
    pub battle_ratings: BattleRatings,
    pub is_premium: bool,
    pub weapons: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVehicle {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    country: String,
    #[serde(default)]
    vehicle_type: String,
    #[serde(default)]
    arcade_br: Option<f64>,
    #[serde(default)]
    realistic_br: Option<f64>,
    #[serde(default)]
    realistic_ground_br: Option<f64>,
    #[serde(default)]
    simulator_br: Option<f64>,
    #[serde(default)]
    simulator_ground_br: Option<f64>,
    #[serde(default)]
    is_premium: bool,
    #[serde(default)]
    weapons: Vec<RawWeapon>,
    #[serde(default)]
    images: Option<RawImages>,
}

#[derive(Debug, Deserialize)]
struct RawWeapon {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawImages {
    #[serde(default)]
    image: Option<String>,
}

impl RawVehicle {
    /// Normalize a raw API record. `requested_id` fills in a missing identifier.
    pub(crate) fn into_record(self, requested_id: &str) -> VehicleRecord {
        let weapons = self
            .weapons
            .iter()
            .filter(|weapon| !weapon.name.is_empty())
            .map(|weapon| weapon_display_name(&weapon.name.to_lowercase()))
            .collect();

        VehicleRecord {
            identifier: self
                .identifier
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| requested_id.to_owned()),
            country: normalize_country(&self.country),
            vehicle_type: normalize_vehicle_type(&self.vehicle_type),
            battle_ratings: BattleRatings {
                arcade: self.arcade_br,
                realistic: self.realistic_br,
                realistic_ground: self.realistic_ground_br,
                simulator: self.simulator_br,
                simulator_ground: self.simulator_ground_br,
            },
            is_premium: self.is_premium,
            weapons,
            image_url: self
                .images
                .and_then(|images| images.image)
                .filter(|url| !url.is_empty()),
        }
    }
}
