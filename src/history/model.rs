use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::core::AvError;
use crate::history::fields::{
    ADJUSTED_CLOSE, CLOSE, DIVIDEND, FieldValue, HIGH, LOW, OPEN, SPLIT_COEFFICIENT, VOLUME,
};

/// Canonical name of the date-only time field (daily/weekly/monthly).
pub const AS_OF_DATE: &str = "as_of_date";
/// Canonical name of the date+time field (intraday).
pub const AS_OF_TIME: &str = "as_of_time";

/// The timestamp attached to a bar. A series only ever holds one variant:
/// `Date` for daily/weekly/monthly, `Local` for intraday before UTC
/// conversion, `Utc` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum SeriesTimestamp {
    Date(NaiveDate),
    Local(NaiveDateTime),
    Utc(DateTime<Utc>),
}

impl SeriesTimestamp {
    /// Canonical field name of this timestamp kind.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            SeriesTimestamp::Date(_) => AS_OF_DATE,
            SeriesTimestamp::Local(_) | SeriesTimestamp::Utc(_) => AS_OF_TIME,
        }
    }
}

impl fmt::Display for SeriesTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesTimestamp::Date(d) => write!(f, "{d}"),
            SeriesTimestamp::Local(dt) => write!(f, "{}", dt.format(crate::dates::DATETIME_FORMAT)),
            SeriesTimestamp::Utc(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%z")),
        }
    }
}

/// One fully typed price record. The adjusted trio is present exactly for
/// split/dividend-adjusted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub ts: SeriesTimestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_coefficient: Option<f64>,
}

impl Bar {
    /// Assemble a bar from `(canonical name, typed value)` pairs produced by
    /// [`crate::history::fields::parse_record`].
    pub(crate) fn from_parsed(
        ts: SeriesTimestamp,
        parsed: Vec<(&'static str, FieldValue)>,
    ) -> Result<Self, AvError> {
        let mut open = None;
        let mut high = None;
        let mut low = None;
        let mut close = None;
        let mut volume = None;
        let mut adjusted_close = None;
        let mut dividend_amount = None;
        let mut split_coefficient = None;

        for (name, value) in parsed {
            match (name, value) {
                (OPEN, FieldValue::Float(v)) => open = Some(v),
                (HIGH, FieldValue::Float(v)) => high = Some(v),
                (LOW, FieldValue::Float(v)) => low = Some(v),
                (CLOSE, FieldValue::Float(v)) => close = Some(v),
                (VOLUME, FieldValue::Volume(v)) => volume = Some(v),
                (ADJUSTED_CLOSE, FieldValue::Float(v)) => adjusted_close = Some(v),
                (DIVIDEND, FieldValue::Float(v)) => dividend_amount = Some(v),
                (SPLIT_COEFFICIENT, FieldValue::Float(v)) => split_coefficient = Some(v),
                (name, _) => {
                    return Err(AvError::Data(format!("unexpected field {name:?}")));
                }
            }
        }

        let missing = |field: &str| AvError::Data(format!("record missing field {field:?}"));
        Ok(Bar {
            ts,
            open: open.ok_or_else(|| missing(OPEN))?,
            high: high.ok_or_else(|| missing(HIGH))?,
            low: low.ok_or_else(|| missing(LOW))?,
            close: close.ok_or_else(|| missing(CLOSE))?,
            volume: volume.ok_or_else(|| missing(VOLUME))?,
            adjusted_close,
            dividend_amount,
            split_coefficient,
        })
    }
}

/// The result of one history fetch: the queried ticker, bars in strictly
/// ascending time order, the source timezone label, the metadata-reported
/// refresh time, and the client-side retrieval time.
///
/// Equality is full structural equality, not ticker identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    pub ticker: String,
    pub bars: Vec<Bar>,
    pub timezone: String,
    pub updated_at: SeriesTimestamp,
    pub retrieved_at: DateTime<Utc>,
}

impl fmt::Display for PriceHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceHistory(ticker={}, bars={}, timezone={})",
            self.ticker,
            self.bars.len(),
            self.timezone
        )
    }
}

/// Yield `(timestamp, split ratio)` for every adjusted bar whose split
/// coefficient is not 1. Bars without the field (plain series) yield
/// nothing.
pub fn filter_splits(bars: &[Bar]) -> impl Iterator<Item = (SeriesTimestamp, f64)> + '_ {
    bars.iter().filter_map(|b| {
        b.split_coefficient
            .filter(|&ratio| ratio != 1.0)
            .map(|ratio| (b.ts, ratio))
    })
}

/// Yield `(timestamp, dividend amount)` for every adjusted bar with a
/// nonzero dividend.
pub fn filter_dividends(bars: &[Bar]) -> impl Iterator<Item = (SeriesTimestamp, f64)> + '_ {
    bars.iter().filter_map(|b| {
        b.dividend_amount
            .filter(|&amount| amount != 0.0)
            .map(|amount| (b.ts, amount))
    })
}
