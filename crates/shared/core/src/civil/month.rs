use chrono::{Datelike, NaiveDate};

use crate::error::{DateTimeError, DateTimeResult};

/// Month of the year, numbered 1 (January) to 12 (December)
pub use chrono::Month;

/// Month from its ISO number (1-12)
pub(crate) fn month_of(value: u8) -> DateTimeResult<Month> {
    Month::try_from(value).map_err(|_| {
        DateTimeError::InvalidDate(format!("month {value} is not in range 1..=12"))
    })
}

/// Month of a date
pub(crate) fn month_of_date(date: NaiveDate) -> Month {
    (0..date.month0()).fold(Month::January, |month, _| month.succ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbering_starts_at_one() {
        assert_eq!(month_of(1).unwrap(), Month::January);
        assert_eq!(month_of(3).unwrap(), Month::March);
        assert_eq!(month_of(12).unwrap(), Month::December);
        assert_eq!(Month::August.number_from_month(), 8);
    }

    #[test]
    fn test_out_of_range_month_rejected() {
        assert!(matches!(month_of(0), Err(DateTimeError::InvalidDate(_))));
        assert!(matches!(month_of(13), Err(DateTimeError::InvalidDate(_))));
    }

    #[test]
    fn test_month_of_date_covers_every_month() {
        for number in 1..=12u8 {
            let date = NaiveDate::from_ymd_opt(1997, u32::from(number), 1).unwrap();
            assert_eq!(month_of_date(date), month_of(number).unwrap());
        }
    }
}
