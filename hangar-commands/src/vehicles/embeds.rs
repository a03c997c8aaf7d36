use tracing::warn;
use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, ImageSource};

use hangar_utils::embed::DEFAULT_EMBED_COLOR;
use hangar_vehicles::{BattleRatings, VehicleRecord};

/// Discord's cap on fields per embed.
const MAX_EMBED_FIELDS: usize = 25;
const FIXED_FIELDS: usize = 3;

/// Build the info card for one vehicle.
///
/// Field order: country, vehicle type, arcade rating, then one field per weapon.
pub fn build_vehicle_card(record: &VehicleRecord) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title(format!("Vehicle info for {}", record.identifier))
        .color(DEFAULT_EMBED_COLOR)
        .description(ratings_summary(&record.battle_ratings, record.is_premium))
        .field(EmbedFieldBuilder::new("Country", or_unknown(&record.country)))
        .field(EmbedFieldBuilder::new(
            "Vehicle Type",
            or_unknown(&record.vehicle_type),
        ))
        .field(EmbedFieldBuilder::new(
            "Arcade BR",
            format_rating(record.battle_ratings.arcade),
        ));

    for (index, weapon) in record
        .weapons
        .iter()
        .take(MAX_EMBED_FIELDS - FIXED_FIELDS)
        .enumerate()
    {
        builder = builder.field(EmbedFieldBuilder::new(
            format!("Weapon {}", index + 1),
            or_unknown(weapon),
        ));
    }

    if let Some(url) = record.image_url.as_deref() {
        match ImageSource::url(url) {
            Ok(image) => builder = builder.image(image),
            Err(source) => warn!(?source, %url, "skipping unusable vehicle image url"),
        }
    }

    Ok(builder.validate()?.build())
}

fn ratings_summary(ratings: &BattleRatings, is_premium: bool) -> String {
    format!(
        "Realistic BR {} • Realistic Ground BR {} • Simulator BR {} • Simulator Ground BR {}\nPremium: {}",
        format_rating(ratings.realistic),
        format_rating(ratings.realistic_ground),
        format_rating(ratings.simulator),
        format_rating(ratings.simulator_ground),
        if is_premium { "Yes" } else { "No" },
    )
}

fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "N/A".to_owned(), |value| format!("{value:.1}"))
}

fn or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        "Unknown".to_owned()
    } else {
        value.to_owned()
    }
}
