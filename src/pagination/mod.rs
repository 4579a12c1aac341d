//! Pagination module
//!
//! Follows the server's `next` cursor until it runs out.
//!
//! # Overview
//!
//! Every OTX collection endpoint answers with a page of the form
//! `{"results": [...], "next": "<absolute url>" | null}`. A [`Pager`] walks
//! those pages one request at a time and exposes them either eagerly
//! ([`Pager::collect_all`]) or as a lazy [`RecordStream`] that only issues the
//! request for page N+1 once the records of page N have been consumed.

mod pager;
mod types;

pub use pager::{Pager, RecordStream};
pub use types::{Endpoint, NextPage, Page, PaginationState, Phase, DEFAULT_LIMIT};
