use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc, Weekday};

/// Working-hours calendar: a fixed daily window on weekdays only.
///
/// All placement math happens in UTC. Hours within the window are contiguous;
/// there is no lunch break or partial-day carry-over across non-working hours.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    start_hour: u32,
    end_hour: u32,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl WorkCalendar {
    /// Create a calendar with the given daily window. Hours must satisfy
    /// `start < end <= 24`; `Config::validate` enforces this at startup.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Working hours available in one full day.
    pub fn hours_per_day(&self) -> i64 {
        (self.end_hour - self.start_hour) as i64
    }

    fn is_working_day(date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn day_start(&self, date: NaiveDate) -> DateTime<Utc> {
        midnight(date) + Duration::hours(self.start_hour as i64)
    }

    // end_hour may be 24, which NaiveDate::and_hms_opt cannot express, so the
    // window end is computed from midnight instead.
    fn day_end(&self, date: NaiveDate) -> DateTime<Utc> {
        midnight(date) + Duration::hours(self.end_hour as i64)
    }

    /// The first working instant at or after `t`: `t` itself when it falls
    /// inside a working window, otherwise the start of the next working day.
    pub fn next_working_instant(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let mut t = t;
        loop {
            let date = t.date_naive();
            if !Self::is_working_day(date) {
                t = self.day_start(date + Days::new(1));
                continue;
            }
            if t < self.day_start(date) {
                return self.day_start(date);
            }
            if t >= self.day_end(date) {
                t = self.day_start(date + Days::new(1));
                continue;
            }
            return t;
        }
    }

    /// Consume `estimated_hours` of working time starting at or after
    /// `cursor`, rolling over across day boundaries and weekends. Returns the
    /// task's `(start, end)`; the caller leaves its cursor at `end` so tasks
    /// run back-to-back.
    pub fn place(&self, cursor: DateTime<Utc>, estimated_hours: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.next_working_instant(cursor);
        let mut cursor = start;
        let mut remaining = Duration::hours(estimated_hours);

        while remaining > Duration::zero() {
            cursor = self.next_working_instant(cursor);
            let day_end = self.day_end(cursor.date_naive());
            let available = day_end - cursor;
            if available >= remaining {
                cursor += remaining;
                remaining = Duration::zero();
            } else {
                remaining -= available;
                cursor = day_end;
            }
        }

        (start, cursor)
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
