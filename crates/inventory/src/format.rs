use chrono::{DateTime, TimeZone};

/// Short board timestamp, e.g. `3/7 9:05am`.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    ts.format("%-m/%-d %-I:%M%P").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_month_day_and_twelve_hour_time() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&morning), "3/7 9:05am");

        let evening = Utc.with_ymd_and_hms(2024, 11, 23, 18, 30, 0).unwrap();
        assert_eq!(format_timestamp(&evening), "11/23 6:30pm");

        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&midnight), "1/1 12:00am");
    }
}
