use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xED_42_45;

/// Build a standard paginated embed with consistent styling.
///
/// `page` is one-based. The footer is omitted for single-page results.
pub fn build_paginated_embed(
    title: &str,
    page: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let builder = EmbedBuilder::new().title(title).color(DEFAULT_EMBED_COLOR);

    let embed = if total_pages > 1 {
        let footer = EmbedFooterBuilder::new(format!("Page {page}/{total_pages}")).build();
        builder.footer(footer).validate()?.build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}
