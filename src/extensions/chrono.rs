use chrono::{Datelike, NaiveDate};

pub trait NaiveDateExt {
    /// The same month/day in `year`. 29 February maps to 28 February when
    /// `year` is not a leap year.
    fn anniversary_in(&self, year: i32) -> NaiveDate;
}

impl NaiveDateExt for NaiveDate {
    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month(), self.day() - 1))
            .unwrap_or(*self)
    }
}
