//! Embed and component composition for paginated choice grids.

use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;

use crate::embed::build_paginated_embed;

use super::components::{Choice, build_choice_rows, build_nav_components};
use super::page::clamp_index;

/// Build a paginated grid view: titled embed, choice rows, then navigation.
///
/// `index` is zero-based; `origin` ties the navigation buttons to their session.
pub fn build_choice_view(
    title: &str,
    choices: &[Choice],
    index: usize,
    total_pages: usize,
    origin: u64,
) -> anyhow::Result<(Embed, Vec<Component>)> {
    let total_pages = total_pages.max(1);
    let index = clamp_index(index, total_pages);

    let embed = build_paginated_embed(title, index + 1, total_pages)?;

    let mut components = build_choice_rows(choices)?;
    components.extend(build_nav_components(index, total_pages, origin));

    Ok((embed, components))
}
