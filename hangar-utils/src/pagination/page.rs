//! Pure pagination math: page partitioning and clamped navigation.

/// Direction of a navigation button press.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Split `items` into contiguous pages of at most `per_page` items, keeping order.
///
/// An empty input yields no pages; callers report "no results" instead of
/// rendering an empty grid.
pub fn paginate<T: Clone>(items: &[T], per_page: usize) -> Vec<Vec<T>> {
    items
        .chunks(per_page.max(1))
        .map(<[T]>::to_vec)
        .collect()
}

/// Clamp a zero-based page index into `[0, total_pages - 1]`.
pub fn clamp_index(index: usize, total_pages: usize) -> usize {
    index.min(total_pages.saturating_sub(1))
}

/// Move one page in `direction`, clamping at both ends instead of wrapping.
pub fn step(index: usize, direction: Direction, total_pages: usize) -> usize {
    let index = clamp_index(index, total_pages);
    let moved = match direction {
        Direction::Previous => index.saturating_sub(1),
        Direction::Next => index.saturating_add(1),
    };
    clamp_index(moved, total_pages)
}
