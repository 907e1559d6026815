use chrono::NaiveDate;

use crate::error::CoreError;

/// Half-open release date window `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub year: i32,
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window for `month` of `year`; December rolls into January of the next year.
    pub fn for_month(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::InvalidYear(year))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(CoreError::InvalidYear(next_year))?;
        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Value for the catalog API `dates` parameter, e.g. `2023-12-01,2024-01-01`.
    pub fn query_value(&self) -> String {
        format!(
            "{},{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Whether a record released on `release_date` belongs to this window.
    ///
    /// Records without a parseable `YYYY-MM-DD` date are kept.
    pub fn admits_release(&self, release_date: Option<&str>) -> bool {
        release_date
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .is_none_or(|date| self.contains(date))
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_month() {
        let w = DateWindow::for_month(2023, 2).unwrap();
        assert_eq!(w.query_value(), "2023-02-01,2023-03-01");
    }

    #[test]
    fn december_rolls_into_next_year() {
        let w = DateWindow::for_month(2023, 12).unwrap();
        assert_eq!(w.start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(w.end, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(w.query_value(), "2023-12-01,2024-01-01");
    }

    #[test]
    fn window_is_half_open() {
        let w = DateWindow::for_month(2024, 2).unwrap();
        assert!(w.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(w.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!w.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn release_on_end_date_is_not_admitted() {
        let w = DateWindow::for_month(2023, 5).unwrap();
        assert!(w.admits_release(Some("2023-05-01")));
        assert!(w.admits_release(Some("2023-05-31")));
        assert!(!w.admits_release(Some("2023-06-01")));
        assert!(!w.admits_release(Some("2023-04-30")));
    }

    #[test]
    fn unknown_release_is_admitted() {
        let w = DateWindow::for_month(2023, 5).unwrap();
        assert!(w.admits_release(None));
        assert!(w.admits_release(Some("TBA")));
    }

    #[test]
    fn rejects_bad_month() {
        assert!(matches!(
            DateWindow::for_month(2023, 0),
            Err(CoreError::InvalidMonth(0))
        ));
        assert!(matches!(
            DateWindow::for_month(2023, 13),
            Err(CoreError::InvalidMonth(13))
        ));
    }

    #[test]
    fn display_is_month_slash_year() {
        assert_eq!(DateWindow::for_month(1998, 7).unwrap().to_string(), "07/1998");
    }
}
