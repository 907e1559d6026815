pub mod client;
pub mod error;
pub mod fetch;
pub mod random;
pub mod types;

pub use client::RawgClient;
pub use error::CatalogError;
pub use fetch::{Catalog, CatalogFetcher, FetchOptions, PageSource, RandomSearch, fetch_games};
pub use random::pick_random_period;
pub use types::{GamesPage, RawGame};
