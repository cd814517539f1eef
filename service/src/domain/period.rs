//! [`Period`] definitions.

use common::{calendar, Month, Year};
use serde::{Deserialize, Serialize};
use time::Date;

/// One-year subscription coverage window anchored at a start month/year.
///
/// Immutable after creation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Period {
    /// [`Month`] this [`Period`] starts in.
    pub start_month: Month,

    /// [`Year`] this [`Period`] starts in.
    pub start_year: Year,
}

impl Period {
    /// Creates a new one-year [`Period`] anchored at the provided start
    /// month and year.
    #[must_use]
    pub fn new(start_month: Month, start_year: Year) -> Self {
        Self {
            start_month,
            start_year,
        }
    }

    /// Returns the [`Month`] this [`Period`] ends in: the one preceding the
    /// start month, wrapping January to December.
    #[must_use]
    pub fn end_month(&self) -> Month {
        self.start_month.preceding()
    }

    /// Returns the [`Year`] this [`Period`] ends in.
    ///
    /// Always the year after the start year, even for a January-anchored
    /// period whose month range already closes within the start year. A
    /// January start therefore reports containment across two whole
    /// calendar years; callers rely on that.
    #[must_use]
    pub fn end_year(&self) -> Year {
        self.start_year.next()
    }

    /// Indicates whether the given month/year pair falls within this
    /// [`Period`]: on or after (start month, start year) and on or before
    /// (end month, end year).
    #[must_use]
    pub fn contains(&self, month: Month, year: Year) -> bool {
        let end_year = self.end_year();

        if year < self.start_year || year > end_year {
            return false;
        }
        if year == self.start_year {
            return month >= self.start_month;
        }
        if year == end_year {
            return month <= self.end_month();
        }

        // A one-year span has no years strictly between start and end.
        false
    }

    /// Returns the first calendar day of this [`Period`].
    #[must_use]
    pub fn start_date(&self) -> Date {
        calendar::first_day(self.start_month, self.start_year)
    }

    /// Returns the last calendar day of this [`Period`]: one year after the
    /// start minus one day.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn end_date(&self) -> Date {
        calendar::first_day(self.start_month, self.start_year.next())
            .previous_day()
            .expect("not the minimum representable date")
    }

    /// Returns the number of whole days this [`Period`] spans, both
    /// boundary days included.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date() - self.start_date()).whole_days() + 1
    }
}
