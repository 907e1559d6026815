use std::path::PathBuf;

use gamescout_catalog::{Catalog, pick_random_period};
use gamescout_core::{GameRecord, PlatformFilter, SortOrder, sort_records};
use gamescout_export::Exporter;
use gamescout_review::ReviewService;

use crate::error::PipelineError;
use crate::progress::PipelineProgress;

/// Filename used for exports before any search has run.
pub const FALLBACK_FILENAME: &str = "games_results";

type Observer = Box<dyn Fn(&PipelineProgress)>;

/// Search, enrich and export, remembering the most recent result set.
pub struct GamePipeline<C, R> {
    catalog: C,
    reviewer: R,
    exporter: Exporter,
    last_results: Vec<GameRecord>,
    last_period: Option<(i32, u32)>,
    observer: Option<Observer>,
}

impl<C: Catalog, R: ReviewService> GamePipeline<C, R> {
    pub fn new(catalog: C, reviewer: R, exporter: Exporter) -> Self {
        Self {
            catalog,
            reviewer,
            exporter,
            last_results: Vec::new(),
            last_period: None,
            observer: None,
        }
    }

    /// Receive progress updates from subsequent operations.
    pub fn set_observer(&mut self, observer: impl Fn(&PipelineProgress) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Fetch `month` of `year`, optionally enrich every record, and store
    /// the result as the latest search.
    pub fn search(
        &mut self,
        year: i32,
        month: u32,
        platform_filter: Option<&PlatformFilter>,
        enrich: bool,
    ) -> Result<Vec<GameRecord>, PipelineError> {
        self.report(PipelineProgress::FetchStarted { year, month });
        let records = self.catalog.fetch(year, month, platform_filter)?;
        self.finish_search(records, year, month, enrich)
    }

    /// Like [`GamePipeline::search`] for a random month of a random year in
    /// `[min_year, max_year]`. Returns the records and the period searched.
    pub fn search_random(
        &mut self,
        min_year: i32,
        max_year: i32,
        platform_filter: Option<&PlatformFilter>,
        enrich: bool,
    ) -> Result<(Vec<GameRecord>, i32, u32), PipelineError> {
        let (year, month) = pick_random_period(&mut rand::thread_rng(), min_year, max_year)?;
        log::info!("Picked random period {month:02}/{year}");
        let records = self.search(year, month, platform_filter, enrich)?;
        Ok((records, year, month))
    }

    fn finish_search(
        &mut self,
        mut records: Vec<GameRecord>,
        year: i32,
        month: u32,
        enrich: bool,
    ) -> Result<Vec<GameRecord>, PipelineError> {
        self.report(PipelineProgress::FetchCompleted {
            count: records.len(),
        });

        if enrich {
            if self.reviewer.is_available() {
                self.enrich(&mut records)?;
            } else {
                log::warn!("Reviews requested but the review service is not configured");
                self.report(PipelineProgress::ReviewSkipped);
            }
        }

        self.last_results = records.clone();
        self.last_period = Some((year, month));
        Ok(records)
    }

    fn enrich(&self, records: &mut [GameRecord]) -> Result<(), PipelineError> {
        let total = records.len();
        for (index, record) in records.iter_mut().enumerate() {
            log::info!(
                "Generating review for '{}' ({}/{total})",
                record.title,
                index + 1
            );
            self.report(PipelineProgress::reviewing(index + 1, total, &record.title));
            let outcome = self.reviewer.generate(record);
            record.apply_review(outcome)?;
        }
        let reviewed = records.iter().filter(|r| r.has_review()).count();
        log::info!("Reviewed {reviewed} of {total} games");
        self.report(PipelineProgress::ReviewCompleted { reviewed, total });
        Ok(())
    }

    /// Copy of the latest result set, empty before any search.
    pub fn last_results(&self) -> Vec<GameRecord> {
        self.last_results.clone()
    }

    /// Copy of the latest result set in the given order.
    pub fn sorted_results(&self, order: SortOrder) -> Vec<GameRecord> {
        let mut records = self.last_results();
        sort_records(&mut records, order);
        records
    }

    /// The `(year, month)` of the latest search.
    pub fn last_period(&self) -> Option<(i32, u32)> {
        self.last_period
    }

    /// `games_results_<year>_<month>` for the latest search.
    pub fn default_filename(&self) -> String {
        match self.last_period {
            Some((year, month)) => format!("{FALLBACK_FILENAME}_{year}_{month}"),
            None => FALLBACK_FILENAME.to_string(),
        }
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.exporter.list_formats()
    }

    /// Export `records`, naming the file after the latest search unless
    /// `filename` is given. Returns the absolute path written.
    pub fn export(
        &self,
        records: &[GameRecord],
        format_name: &str,
        filename: Option<&str>,
    ) -> Result<PathBuf, PipelineError> {
        let filename = match filename.map(str::trim).filter(|f| !f.is_empty()) {
            Some(name) => name.to_string(),
            None => self.default_filename(),
        };
        Ok(self.exporter.export(records, format_name, &filename)?)
    }

    pub fn is_review_available(&self) -> bool {
        self.reviewer.is_available()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn reviewer(&self) -> &R {
        &self.reviewer
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    fn report(&self, progress: PipelineProgress) {
        if let Some(observer) = &self.observer {
            observer(&progress);
        }
    }
}
