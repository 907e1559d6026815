/// Progress update reported by the pipeline to an optional observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineProgress {
    /// A catalog fetch has started for this month
    FetchStarted { year: i32, month: u32 },

    /// The fetch finished with this many records after filtering
    FetchCompleted { count: usize },

    /// Reviews were requested but the review service is not configured
    ReviewSkipped,

    /// About to request the review for record `current` of `total` (1-based)
    Reviewing {
        current: usize,
        total: usize,
        title: String,
    },

    /// Enrichment pass finished; `reviewed` records received review text
    ReviewCompleted { reviewed: usize, total: usize },
}

impl PipelineProgress {
    pub fn reviewing(current: usize, total: usize, title: impl Into<String>) -> Self {
        Self::Reviewing {
            current,
            total,
            title: title.into(),
        }
    }

    /// Fraction of the enrichment pass done (0.0 to 1.0) if calculable.
    pub fn percentage(&self) -> Option<f64> {
        match self {
            Self::Reviewing { current, total, .. } if *total > 0 => {
                Some(current.saturating_sub(1) as f64 / *total as f64)
            }
            Self::ReviewCompleted { .. } => Some(1.0),
            _ => None,
        }
    }
}
