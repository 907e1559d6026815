//! Terminal rendering of pipeline progress.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use gamescout_lib::PipelineProgress;

/// Spinner while fetching, bar while reviewing.
pub(crate) struct ProgressDisplay {
    quiet: bool,
    current: RefCell<Option<ProgressBar>>,
}

impl ProgressDisplay {
    pub(crate) fn new(quiet: bool) -> Rc<Self> {
        Rc::new(Self {
            quiet,
            current: RefCell::new(None),
        })
    }

    fn new_bar(&self, bar: ProgressBar) -> ProgressBar {
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar
    }

    fn replace(&self, bar: Option<ProgressBar>) {
        if let Some(old) = self.current.replace(bar) {
            old.finish_and_clear();
        }
    }

    pub(crate) fn handle(&self, event: &PipelineProgress) {
        match event {
            PipelineProgress::FetchStarted { year, month } => {
                let spinner = self.new_bar(ProgressBar::new_spinner());
                let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                    .expect("static pattern")
                    .tick_chars("/-\\|");
                spinner.set_style(style);
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner.set_message(format!("Searching games released in {month:02}/{year}..."));
                self.replace(Some(spinner));
            }
            PipelineProgress::FetchCompleted { .. } => self.replace(None),
            PipelineProgress::ReviewSkipped => {
                self.replace(None);
                log::warn!("AI reviews are not available (no OPENAI_API_KEY configured)");
            }
            PipelineProgress::Reviewing {
                current,
                total,
                title,
            } => {
                if *current == 1 {
                    let bar = self.new_bar(ProgressBar::new(*total as u64));
                    let style = ProgressStyle::with_template(
                        "  Reviewing [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
                    )
                    .expect("static pattern")
                    .progress_chars("=> ");
                    bar.set_style(style);
                    self.replace(Some(bar));
                }
                if let Some(bar) = self.current.borrow().as_ref() {
                    bar.set_position(current.saturating_sub(1) as u64);
                    bar.set_message(title.clone());
                }
            }
            PipelineProgress::ReviewCompleted { reviewed, total } => {
                self.replace(None);
                log::info!("Generated {reviewed} of {total} AI reviews");
            }
        }
    }

    /// Drop any bar still on screen, e.g. after a failed fetch.
    pub(crate) fn clear(&self) {
        self.replace(None);
    }
}
