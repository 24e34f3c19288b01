//! Domain types passed between the search index, services and templates.

pub mod hotel;
pub mod paging;
