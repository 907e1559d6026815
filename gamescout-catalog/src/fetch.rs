//! Paginated catalog fetch.
//!
//! Pages are requested one at a time in ascending order until the upstream
//! runs dry, says there is nothing further, or the page cap is hit. Any
//! transport error aborts the fetch and drops whatever was already collected.

use gamescout_core::filter;
use gamescout_core::{DateWindow, GameRecord, PlatformFilter};

use crate::error::CatalogError;
use crate::random::pick_random_period;
use crate::types::GamesPage;

pub const DEFAULT_PAGE_SIZE: u32 = 40;
pub const DEFAULT_MAX_PAGES: u32 = 4;

/// Source of individual catalog pages. Implemented by the HTTP client and by
/// in-memory fakes in tests.
pub trait PageSource {
    /// Fetch page `page` (1-based) of the listing for `window`.
    fn fetch_page(
        &self,
        window: &DateWindow,
        page: u32,
        page_size: u32,
    ) -> Result<GamesPage, CatalogError>;
}

/// Paging limits for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub page_size: u32,
    /// Hard cap on pages requested, regardless of what upstream claims
    pub max_pages: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    EmptyPage,
    LastPage,
    PageCap,
}

/// Fetch every page for `window` and keep the records released inside it
/// that match `platform_filter`.
pub fn fetch_games<S: PageSource + ?Sized>(
    source: &S,
    window: &DateWindow,
    platform_filter: Option<&PlatformFilter>,
    options: FetchOptions,
) -> Result<Vec<GameRecord>, CatalogError> {
    log::info!("Searching games released in {window}");

    let mut games = Vec::new();
    let mut stop = StopReason::PageCap;

    for page in 1..=options.max_pages {
        log::debug!("Loading page {page}/{}", options.max_pages);
        let data = source.fetch_page(window, page, options.page_size)?;
        let has_next = data.has_next();

        let results = data.into_results();
        if results.is_empty() {
            log::debug!("Page {page} returned no results");
            stop = StopReason::EmptyPage;
            break;
        }

        let before = games.len();
        for record in results.into_iter().map(|raw| raw.into_record()) {
            if !window.admits_release(record.release_date.as_deref()) {
                log::debug!(
                    "Dropping '{}' released {} outside {window}",
                    record.title,
                    record.release_date_str()
                );
                continue;
            }
            if filter::matches(&record, platform_filter) {
                games.push(record);
            }
        }
        log::debug!("Kept {} games from page {page}", games.len() - before);

        if !has_next {
            stop = StopReason::LastPage;
            break;
        }
    }

    match stop {
        StopReason::EmptyPage => log::debug!("Stopped on an empty page"),
        StopReason::LastPage => log::debug!("Reached the last available page"),
        StopReason::PageCap => log::debug!("Stopped at the {}-page cap", options.max_pages),
    }
    log::info!("Found {} games for {window}", games.len());
    Ok(games)
}

/// Records picked for a random period, along with the period searched.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    pub records: Vec<GameRecord>,
    pub year: i32,
    pub month: u32,
}

/// Whole-window catalog access, the seam the pipeline depends on.
pub trait Catalog {
    /// Records released in `month` of `year`, filtered by platform.
    fn fetch(
        &self,
        year: i32,
        month: u32,
        platform_filter: Option<&PlatformFilter>,
    ) -> Result<Vec<GameRecord>, CatalogError>;

    /// Search a random month of a random year in `[min_year, max_year]`.
    fn fetch_random(
        &self,
        min_year: i32,
        max_year: i32,
        platform_filter: Option<&PlatformFilter>,
    ) -> Result<RandomSearch, CatalogError> {
        let (year, month) = pick_random_period(&mut rand::thread_rng(), min_year, max_year)?;
        log::info!("Picked random period {month:02}/{year}");
        let records = self.fetch(year, month, platform_filter)?;
        Ok(RandomSearch {
            records,
            year,
            month,
        })
    }
}

/// `Catalog` over any page source.
pub struct CatalogFetcher<S> {
    source: S,
    options: FetchOptions,
}

impl<S: PageSource> CatalogFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> FetchOptions {
        self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: PageSource> Catalog for CatalogFetcher<S> {
    fn fetch(
        &self,
        year: i32,
        month: u32,
        platform_filter: Option<&PlatformFilter>,
    ) -> Result<Vec<GameRecord>, CatalogError> {
        let window = DateWindow::for_month(year, month)?;
        fetch_games(&self.source, &window, platform_filter, self.options)
    }
}
