use chrono::{Datelike, Local, NaiveDate};

/// Tracks the (year, month) period currently being viewed.
///
/// The selection is session state only: it starts at the current calendar
/// month and is never persisted. Navigation is unbounded in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelector {
    year: i32,
    month: u32,
}

impl MonthSelector {
    /// Selects the current calendar month on the local clock.
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn at(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    pub fn current(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Moves the selection by `offset` months, rolling over year
    /// boundaries in either direction, and returns the new period.
    pub fn shift(&mut self, offset: i32) -> (i32, u32) {
        let index = self.year * 12 + self.month as i32 - 1 + offset;
        self.year = index.div_euclid(12);
        self.month = (index.rem_euclid(12) + 1) as u32;
        self.current()
    }

    /// Header label for the selected period, e.g. "May 2024".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}
