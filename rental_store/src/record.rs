use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Flat rate charged per rental day, in pesos.
pub const DAILY_RATE: i64 = 2000;

/// Separator between record fields in the persisted file.
pub const FIELD_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad date {0:?}, expected YYYY-MM-DD")]
pub struct ParseDateError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("expected 7 fields, got {0}")]
    FieldCount(usize),
    #[error(transparent)]
    Date(#[from] ParseDateError),
    #[error("bad number {0:?}")]
    Number(String),
}

/// A calendar date as entered by the user, `YYYY-MM-DD`.
///
/// Shape-validated only: components must be numeric and zero-padded, but no
/// month-length or leap-year rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Display for RentalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for RentalDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(ParseDateError(s.to_string()));
        }
        let (year, month, day) = (&s[0..4], &s[5..7], &s[8..10]);
        let all_digits = [year, month, day]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
        if !all_digits {
            return Err(ParseDateError(s.to_string()));
        }
        Ok(RentalDate {
            year: year.parse().map_err(|_| ParseDateError(s.to_string()))?,
            month: month.parse().map_err(|_| ParseDateError(s.to_string()))?,
            day: day.parse().map_err(|_| ParseDateError(s.to_string()))?,
        })
    }
}

/// Day count between two dates over a simplified calendar (30-day months,
/// 365-day years), inclusive of the first day and never less than one.
pub fn rental_days(start: RentalDate, end: RentalDate) -> u32 {
    let months = i64::from(end.month) - i64::from(start.month);
    let days = i64::from(end.day) - i64::from(start.day);
    let years = i64::from(end.year) - i64::from(start.year);
    (months * 30 + days + years * 365 + 1).max(1) as u32
}

/// One rental transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    pub renter_name: String,
    pub phone_model: String,
    pub model_variant: String,
    pub start_date: RentalDate,
    pub end_date: RentalDate,
    pub days: u32,
    pub total_amount: i64,
}

impl RentalRecord {
    /// Builds a record, deriving `days` and `total_amount` from the dates.
    pub fn new(
        renter_name: String,
        phone_model: String,
        model_variant: String,
        start_date: RentalDate,
        end_date: RentalDate,
    ) -> RentalRecord {
        let days = rental_days(start_date, end_date);
        RentalRecord {
            renter_name,
            phone_model,
            model_variant,
            start_date,
            end_date,
            days,
            total_amount: i64::from(days) * DAILY_RATE,
        }
    }
}

/// Renders the persisted line:
/// `name|model|variant|start|end|days|amount`.
impl Display for RentalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}|{}",
            self.renter_name,
            self.phone_model,
            self.model_variant,
            self.start_date,
            self.end_date,
            self.days,
            self.total_amount,
        )
    }
}

impl FromStr for RentalRecord {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 7 {
            return Err(ParseRecordError::FieldCount(fields.len()));
        }
        Ok(RentalRecord {
            renter_name: fields[0].to_string(),
            phone_model: fields[1].to_string(),
            model_variant: fields[2].to_string(),
            start_date: fields[3].parse()?,
            end_date: fields[4].parse()?,
            days: fields[5]
                .parse()
                .map_err(|_| ParseRecordError::Number(fields[5].to_string()))?,
            total_amount: fields[6]
                .parse()
                .map_err(|_| ParseRecordError::Number(fields[6].to_string()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{rental_days, ParseRecordError, RentalDate, RentalRecord};

    fn date(s: &str) -> RentalDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_date_parse_and_format() {
        let parsed = date("2024-01-05");
        assert_eq!(
            parsed,
            RentalDate {
                year: 2024,
                month: 1,
                day: 5
            }
        );
        assert_eq!(parsed.to_string(), "2024-01-05");
    }

    #[test]
    fn test_date_parse_rejects_bad_shapes() {
        for bad in ["2024-1-5", "01/05/2024", "2024-01-0x", "", "2024 01 05"] {
            assert!(bad.parse::<RentalDate>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rental_days_same_month() {
        assert_eq!(rental_days(date("2024-01-01"), date("2024-01-05")), 5);
    }

    #[test]
    fn test_rental_days_across_months() {
        // (2-1)*30 + (2-28) + 1
        assert_eq!(rental_days(date("2024-01-28"), date("2024-02-02")), 5);
    }

    #[test]
    fn test_rental_days_across_years() {
        // (1-12)*30 + (2-30) + 365 + 1
        assert_eq!(rental_days(date("2024-12-30"), date("2025-01-02")), 8);
    }

    #[test]
    fn test_rental_days_floors_at_one() {
        assert_eq!(rental_days(date("2024-01-05"), date("2024-01-01")), 1);
    }

    #[test]
    fn test_new_derives_days_and_amount() {
        let record = RentalRecord::new(
            "Juan Dela Cruz".to_string(),
            "iPhone 16".to_string(),
            "pro".to_string(),
            date("2024-01-01"),
            date("2024-01-05"),
        );

        assert_eq!(record.days, 5);
        assert_eq!(record.total_amount, 10000);
    }

    #[test]
    fn test_record_line_round_trip() {
        let line = "Juan Dela Cruz|iPhone 16|pro|2024-01-01|2024-01-05|5|10000";
        let record = line.parse::<RentalRecord>().unwrap();

        assert_eq!(record.renter_name, "Juan Dela Cruz");
        assert_eq!(record.phone_model, "iPhone 16");
        assert_eq!(record.model_variant, "pro");
        assert_eq!(record.days, 5);
        assert_eq!(record.total_amount, 10000);
        assert_eq!(record.to_string(), line);
    }

    #[test]
    fn test_record_parse_wrong_field_count() {
        let result = "Juan|iPhone 16|pro".parse::<RentalRecord>();
        assert_eq!(result, Err(ParseRecordError::FieldCount(3)));
    }

    #[test]
    fn test_record_parse_bad_number() {
        let result = "Juan|iPhone 16|pro|2024-01-01|2024-01-05|five|10000".parse::<RentalRecord>();
        assert_eq!(
            result,
            Err(ParseRecordError::Number("five".to_string()))
        );
    }

    #[test]
    fn test_record_parse_bad_date() {
        let result = "Juan|iPhone 16|pro|01/01/2024|2024-01-05|5|10000".parse::<RentalRecord>();
        assert!(matches!(result, Err(ParseRecordError::Date(_))));
    }
}
