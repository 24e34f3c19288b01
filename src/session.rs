//! Per-session paging state.
//!
//! The state written after a search is meant for exactly one following paging
//! request: reading it removes it, and a successful page change writes a fresh
//! copy. Each piece lives under its own key so the cookie stays readable.

use actix_session::Session;
use thiserror::Error;

use crate::domain::paging::PagingState;

pub const PAGE_KEY: &str = "page";
pub const LEFT_MOST_PAGE_KEY: &str = "leftMostPage";
pub const SEARCH_TEXT_KEY: &str = "searchText";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session key {key}: {message}")]
    Read { key: &'static str, message: String },

    #[error("failed to write session key {key}: {message}")]
    Write { key: &'static str, message: String },
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Read-once storage of the paging state of one user session.
pub trait PagingSession {
    /// Removes and returns the stored state, `None` when any key is missing.
    fn take_paging_state(&self) -> SessionResult<Option<PagingState>>;
    /// Overwrites the stored state.
    fn store_paging_state(&self, state: &PagingState) -> SessionResult<()>;
}

fn take_key<T>(session: &Session, key: &'static str) -> SessionResult<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    session
        .remove_as::<T>(key)
        .transpose()
        .map_err(|raw| SessionError::Read {
            key,
            message: format!("unexpected value {raw}"),
        })
}

fn insert_key<T>(session: &Session, key: &'static str, value: T) -> SessionResult<()>
where
    T: serde::Serialize,
{
    session
        .insert(key, value)
        .map_err(|e| SessionError::Write {
            key,
            message: e.to_string(),
        })
}

impl PagingSession for Session {
    fn take_paging_state(&self) -> SessionResult<Option<PagingState>> {
        let page = take_key::<usize>(self, PAGE_KEY)?;
        let left_most_page = take_key::<usize>(self, LEFT_MOST_PAGE_KEY)?;
        let search_text = take_key::<String>(self, SEARCH_TEXT_KEY)?;

        Ok(match (page, left_most_page, search_text) {
            (Some(page), Some(left_most_page), Some(search_text)) => Some(PagingState {
                page,
                left_most_page,
                search_text,
            }),
            _ => None,
        })
    }

    fn store_paging_state(&self, state: &PagingState) -> SessionResult<()> {
        insert_key(self, PAGE_KEY, state.page)?;
        insert_key(self, LEFT_MOST_PAGE_KEY, state.left_most_page)?;
        insert_key(self, SEARCH_TEXT_KEY, &state.search_text)
    }
}
