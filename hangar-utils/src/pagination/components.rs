//! Button grid layout and previous/next navigation components.

use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use super::page::Direction;
use super::token::build_nav_custom_id;

/// Maximum number of identifiers shown on one page.
pub const PAGE_SIZE: usize = 20;
/// Maximum buttons Discord allows in one action row.
pub const MAX_PER_ROW: usize = 5;
/// Maximum action rows Discord allows on one message.
pub const MAX_ROWS: usize = 5;

const _: () = assert!(PAGE_SIZE <= MAX_PER_ROW * MAX_ROWS);
// A full page plus the navigation row must still fit on one message.
const _: () = assert!(PAGE_SIZE.div_ceil(MAX_PER_ROW) < MAX_ROWS);

/// Grid layout failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{items} items do not fit in {rows} rows of {per_row}")]
    TooManyItems {
        items: usize,
        rows: usize,
        per_row: usize,
    },
}

/// One selectable grid button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub custom_id: String,
}

/// Lay `items` out left-to-right, top-to-bottom, at most `max_per_row` per row.
///
/// Rejects pages that would need more than `max_rows` rows rather than
/// dropping the overflow.
pub fn layout<T>(
    items: &[T],
    max_per_row: usize,
    max_rows: usize,
) -> Result<Vec<&[T]>, LayoutError> {
    let max_per_row = max_per_row.max(1);

    if items.len() > max_per_row.saturating_mul(max_rows) {
        return Err(LayoutError::TooManyItems {
            items: items.len(),
            rows: max_rows,
            per_row: max_per_row,
        });
    }

    Ok(items.chunks(max_per_row).collect())
}

/// Build action rows of secondary buttons, one per choice.
pub fn build_choice_rows(choices: &[Choice]) -> Result<Vec<Component>, LayoutError> {
    let rows = layout(choices, MAX_PER_ROW, MAX_ROWS)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            Component::ActionRow(ActionRow {
                id: None,
                components: row
                    .iter()
                    .map(|choice| {
                        Component::Button(button(
                            choice.custom_id.clone(),
                            choice.label.clone(),
                            ButtonStyle::Secondary,
                            false,
                        ))
                    })
                    .collect(),
            })
        })
        .collect())
}

/// Build the previous/next row for a paginated message.
///
/// Returns `None` for single-page results. `current_index` is zero-based.
pub fn build_nav_components(
    current_index: usize,
    total_pages: usize,
    origin: u64,
) -> Option<Component> {
    if total_pages <= 1 {
        return None;
    }

    let last_index = total_pages - 1;

    let prev_button = button(
        build_nav_custom_id(Direction::Previous, origin),
        "Previous".to_owned(),
        ButtonStyle::Primary,
        current_index == 0,
    );

    let next_button = button(
        build_nav_custom_id(Direction::Next, origin),
        "Next".to_owned(),
        ButtonStyle::Primary,
        current_index >= last_index,
    );

    Some(Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::Button(prev_button), Component::Button(next_button)],
    }))
}

fn button(custom_id: String, label: String, style: ButtonStyle, disabled: bool) -> Button {
    Button {
        id: None,
        custom_id: Some(custom_id),
        disabled,
        emoji: None,
        label: Some(label),
        style,
        url: None,
        sku_id: None,
    }
}
