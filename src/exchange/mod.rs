//! Rate-table date lookup
//!
//! Parses a rates CSV (`date,exchange_rate`) and query lines
//! (`date | value`), pricing each query at the rate of the nearest
//! date at or before the query date. Rate-file problems are fatal; a
//! query table loads fully or not at all. Query-line problems are
//! recoverable, reported per line by the caller.

mod date;

pub use date::Date;

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

use thiserror::Error;

/// Header required on the first line of a rates file.
pub const RATES_HEADER: &str = "date,exchange_rate";

/// Header required on the first line of a query file.
pub const QUERIES_HEADER: &str = "date | value";

/// Greatest value a query may carry.
const MAX_QUERY_VALUE: f64 = 1000.0;

/// Errors from rate-table loading and query evaluation.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The first line of a file did not match the required header.
    #[error("missing header, expected '{expected}'")]
    MissingHeader {
        /// Header the file must start with.
        expected: &'static str,
    },

    /// A date failed `YYYY-MM-DD` calendar validation.
    #[error("invalid date '{text}'")]
    InvalidDate {
        /// Text that failed to parse.
        text: String,
    },

    /// A rate was not a non-negative decimal number.
    #[error("invalid exchange rate '{text}'")]
    InvalidRate {
        /// Text that failed to parse.
        text: String,
    },

    /// The same date appeared twice in a rates file.
    #[error("duplicate date {date} in rates")]
    DuplicateDate {
        /// Date that repeated.
        date: Date,
    },

    /// A line did not split into the expected fields.
    #[error("malformed line '{line}'")]
    MalformedLine {
        /// Offending line.
        line: String,
    },

    /// A query value was not a number.
    #[error("invalid value '{text}'")]
    InvalidValue {
        /// Text that failed to parse.
        text: String,
    },

    /// A query value fell outside 0..=1000.
    #[error("value {value} not between 0 and 1000")]
    ValueOutOfRange {
        /// Value that was rejected.
        value: f64,
    },

    /// No rate exists at or before the query date.
    #[error("no exchange rate at or before {date}")]
    RateUnavailable {
        /// Date that had no usable rate.
        date: Date,
    },

    /// Reading the underlying file failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered date-to-rate mapping.
#[derive(Debug, Default)]
pub struct RateTable {
    rates: BTreeMap<Date, f64>,
}

impl RateTable {
    /// Parse a rates CSV.
    ///
    /// The first line must be exactly [`RATES_HEADER`]; every further
    /// non-empty line is `date,rate` with a valid date and a
    /// non-negative decimal rate. A repeated date is an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ExchangeError> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.ok_or(ExchangeError::MissingHeader {
            expected: RATES_HEADER,
        })?;
        if header != RATES_HEADER {
            return Err(ExchangeError::MissingHeader {
                expected: RATES_HEADER,
            });
        }

        let mut rates = BTreeMap::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (date_text, rate_text) =
                line.split_once(',').ok_or_else(|| ExchangeError::MalformedLine {
                    line: line.clone(),
                })?;
            let date: Date = date_text.parse()?;
            let rate = parse_rate(rate_text)?;
            if rates.insert(date, rate).is_some() {
                return Err(ExchangeError::DuplicateDate { date });
            }
        }

        Ok(Self { rates })
    }

    /// Number of dated rates loaded.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table holds no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate at the greatest table date ≤ `date`, with that date.
    ///
    /// `None` when the query predates the whole table.
    pub fn rate_at(&self, date: Date) -> Option<(Date, f64)> {
        self.rates
            .range(..=date)
            .next_back()
            .map(|(d, rate)| (*d, *rate))
    }
}

/// One parsed query line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    /// Date the value applies to.
    pub date: Date,
    /// Value to convert, within 0..=1000.
    pub value: f64,
}

/// Parse a `date | value` query line.
///
/// The delimiter is the first `" | "`; the value must be a number
/// between 0 and 1000 inclusive.
pub fn parse_query(line: &str) -> Result<Query, ExchangeError> {
    let (date_text, value_text) =
        line.split_once(" | ").ok_or_else(|| ExchangeError::MalformedLine {
            line: line.to_string(),
        })?;
    let date: Date = date_text.parse()?;
    let value: f64 = value_text
        .trim()
        .parse()
        .map_err(|_| ExchangeError::InvalidValue {
            text: value_text.to_string(),
        })?;
    if !(0.0..=MAX_QUERY_VALUE).contains(&value) {
        return Err(ExchangeError::ValueOutOfRange { value });
    }
    Ok(Query { date, value })
}

/// A priced query: the value multiplied by the applicable rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Query date.
    pub date: Date,
    /// Query value.
    pub value: f64,
    /// Date whose rate was applied (≤ the query date).
    pub rate_date: Date,
    /// Rate that was applied.
    pub rate: f64,
}

impl Conversion {
    /// The converted amount, `value * rate`.
    pub fn product(&self) -> f64 {
        self.value * self.rate
    }
}

impl fmt::Display for Conversion {
    /// Renders `DATE => VALUE = PRODUCT`, noting the rate date when it
    /// differs from the query date. Amounts carry at most six decimal
    /// places, with trailing zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} = {}",
            self.date,
            format_amount(self.value),
            format_amount(self.product())
        )?;
        if self.rate_date != self.date {
            write!(f, " (date used: {})", self.rate_date)?;
        }
        Ok(())
    }
}

/// Six-decimal rendering with trailing zeros (and a bare decimal point)
/// stripped: `0.3 * 3.0` prints as `0.9`, `7100.0` as `7100`.
fn format_amount(amount: f64) -> String {
    let text = format!("{amount:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Evaluate one query line against a rate table.
pub fn convert(table: &RateTable, line: &str) -> Result<Conversion, ExchangeError> {
    let query = parse_query(line)?;
    let (rate_date, rate) = table
        .rate_at(query.date)
        .ok_or(ExchangeError::RateUnavailable { date: query.date })?;
    Ok(Conversion {
        date: query.date,
        value: query.value,
        rate_date,
        rate,
    })
}

fn parse_rate(text: &str) -> Result<f64, ExchangeError> {
    let well_formed = match text.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
    };
    if !well_formed {
        return Err(ExchangeError::InvalidRate {
            text: text.to_string(),
        });
    }
    text.parse().map_err(|_| ExchangeError::InvalidRate {
        text: text.to_string(),
    })
}
