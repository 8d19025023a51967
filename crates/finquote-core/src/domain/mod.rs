//! Domain types produced by the quote client.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Price and observation time for one symbol |
//! | [`SearchResult`] | Raw symbol-search payload, in response order |
//! | [`SearchMatch`] | One search entry |
//! | [`NameLookup`] | Found / not-found outcome of a name lookup |
//! | [`UtcDateTime`] | UTC timestamp for display |

mod models;
mod timestamp;

pub use models::{NameLookup, Quote, SearchMatch, SearchResult};
pub use timestamp::UtcDateTime;
