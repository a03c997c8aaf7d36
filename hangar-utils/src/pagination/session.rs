//! In-memory search sessions keyed by the message they are rendered on.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use moka::sync::Cache;
use tracing::{debug, warn};

use super::components::PAGE_SIZE;
use super::page::{Direction, clamp_index, paginate, step};

/// Identifies one paginated message: the channel and the interaction that created it.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SessionKey {
    pub channel_id: u64,
    pub origin: u64,
}

/// Fetched, paginated results of one search plus the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    pages: Vec<Vec<String>>,
    index: usize,
    owner_id: u64,
}

impl SearchSession {
    /// Paginate `ids` into a fresh session on page 0.
    ///
    /// Returns `None` for an empty id list; there is nothing to page through.
    pub fn new(query: impl Into<String>, ids: &[String], owner_id: u64) -> Option<Self> {
        let pages = paginate(ids, PAGE_SIZE);
        if pages.is_empty() {
            return None;
        }

        Some(Self {
            query: query.into(),
            pages,
            index: 0,
            owner_id,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> &[String] {
        &self.pages[clamp_index(self.index, self.pages.len())]
    }

    /// Move one page in `direction`, clamped to the valid range.
    pub fn navigate(&mut self, direction: Direction) -> usize {
        self.index = step(self.index, direction, self.pages.len());
        self.index
    }

    /// Owned copy of the page currently shown.
    pub fn view(&self) -> PageView {
        PageView {
            query: self.query.clone(),
            ids: self.current_page().to_vec(),
            index: self.index,
            total_pages: self.pages.len(),
        }
    }
}

/// One rendered page of a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub query: String,
    pub ids: Vec<String>,
    pub index: usize,
    pub total_pages: usize,
}

/// Why a navigation click could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("pagination session expired or never existed")]
    Expired,
    #[error("pagination session belongs to another user")]
    WrongUser,
}

/// Bounded, idle-expiring store of search sessions.
///
/// Cheap to clone; clones share the same cache.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<SessionKey, Arc<Mutex<SearchSession>>>,
}

impl SessionStore {
    /// Create a store holding at most `capacity` sessions, each dropped after
    /// `time_to_idle` without a click.
    pub fn new(capacity: u64, time_to_idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(time_to_idle)
                .build(),
        }
    }

    /// Store `session` under `key`, replacing any previous session there.
    pub fn start(&self, key: SessionKey, session: SearchSession) {
        debug!(
            channel_id = key.channel_id,
            origin = key.origin,
            pages = session.page_count(),
            "search session started"
        );
        self.cache.insert(key, Arc::new(Mutex::new(session)));
    }

    /// Current page of the session under `key`, if still live.
    pub fn current(&self, key: SessionKey) -> Option<PageView> {
        let session = self.cache.get(&key)?;
        let session = session.lock().unwrap_or_else(PoisonError::into_inner);
        Some(session.view())
    }

    /// Apply a navigation click by `actor_id`.
    ///
    /// Clicks from anyone but the session owner leave the session untouched.
    pub fn navigate(
        &self,
        key: SessionKey,
        actor_id: u64,
        direction: Direction,
    ) -> Result<PageView, SessionError> {
        let Some(session) = self.cache.get(&key) else {
            warn!(origin = key.origin, actor_id, "navigation on expired search session");
            return Err(SessionError::Expired);
        };
        let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);

        if session.owner_id() != actor_id {
            warn!(
                origin = key.origin,
                actor_id,
                owner_id = session.owner_id(),
                "navigation by non-owner rejected"
            );
            return Err(SessionError::WrongUser);
        }

        session.navigate(direction);
        Ok(session.view())
    }
}
