//! Stable facade for pagination helpers used by command handlers.

/// Default idle lifetime of a search session.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 600;
/// Default maximum number of live search sessions.
pub const DEFAULT_SESSION_CAPACITY: u64 = 1024;

pub mod components;
mod page;
pub mod session;
pub mod token;
mod view;

pub use components::{
    Choice, LayoutError, MAX_PER_ROW, MAX_ROWS, PAGE_SIZE, build_choice_rows,
    build_nav_components, layout,
};
pub use page::{Direction, clamp_index, paginate, step, total_pages};
pub use session::{PageView, SearchSession, SessionError, SessionKey, SessionStore};
pub use token::{NavToken, build_nav_custom_id, parse_nav_custom_id};
pub use view::build_choice_view;
