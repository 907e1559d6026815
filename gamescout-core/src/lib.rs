//! Core data model for gamescout.
//!
//! Defines the game record that flows through the search-enrich-export
//! pipeline along with the small value types around it: ratings, platform
//! filters, date windows and sort orders. Nothing in this crate touches the
//! network or the filesystem.

pub mod error;
pub mod filter;
pub mod record;
pub mod sort;
pub mod window;

pub use error::CoreError;
pub use filter::PlatformFilter;
pub use record::{GameRecord, NOT_AVAILABLE, Rating, ReviewOutcome, has_enrichment};
pub use sort::{SortOrder, SortOrderParseError, sort_records};
pub use window::DateWindow;
