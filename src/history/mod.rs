//! Price-history fetching and the response-normalization transform.
//!
//! One configurable [`HistoryBuilder`] covers all series variants; which
//! function is requested, which response key holds the series, which fields
//! each record carries, and how timestamps parse are all resolved from a
//! small descriptor instead of a type per variant.

use chrono::{DateTime, Utc};

use crate::core::{AvClient, AvError, net};

mod fields;
mod model;
mod params;
mod wire;

pub use model::{AS_OF_DATE, AS_OF_TIME, Bar, PriceHistory, SeriesTimestamp, filter_dividends, filter_splits};
pub use params::{IntradayInterval, OutputSize, Period};

use fields::FieldSpec;
use model::SeriesTimestamp as Ts;
use wire::RawHistory;

/// Which series a builder is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesVariant {
    /// Unadjusted daily/weekly/monthly prices.
    Plain(Period),
    /// Split/dividend-adjusted daily/weekly/monthly prices.
    Adjusted(Period),
    /// Intraday prices at a fixed sampling interval.
    Intraday {
        interval: IntradayInterval,
        /// Convert record timestamps (and `updated_at`) from the exchange's
        /// reported timezone to UTC.
        convert_to_utc: bool,
    },
}

/// How the variant's timestamps are shaped on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeGranularity {
    Date,
    DateTime,
}

/// Everything the transform needs, resolved once per request from the
/// configured variant.
struct SeriesSpec {
    function: String,
    series_key: String,
    fields: &'static [FieldSpec],
    granularity: TimeGranularity,
}

/// A reusable, configured request for one kind of price-history series.
///
/// ```no_run
/// # async fn run() -> Result<(), alphavantage_rs::AvError> {
/// use alphavantage_rs::{AvClient, HistoryBuilder, OutputSize, Period};
///
/// let client = AvClient::builder().api_key("demo").build()?;
/// let history = HistoryBuilder::new(&client)
///     .period(Period::Weekly)
///     .adjusted(true)
///     .output_size(OutputSize::Full)
///     .fetch("MSFT")
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    client: AvClient,
    period: Period,
    adjusted: bool,
    intraday: Option<IntradayInterval>,
    convert_to_utc: bool,
    output_size: OutputSize,
}

impl HistoryBuilder {
    /// Create a builder for unadjusted daily history with compact output.
    #[must_use]
    pub fn new(client: &AvClient) -> Self {
        Self {
            client: client.clone(),
            period: Period::Daily,
            adjusted: false,
            intraday: None,
            convert_to_utc: true,
            output_size: OutputSize::Compact,
        }
    }

    /// Select the sampling period. Clears any intraday configuration.
    #[must_use]
    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self.intraday = None;
        self
    }

    /// Request the split/dividend-adjusted series. (Default: `false`)
    #[must_use]
    pub const fn adjusted(mut self, yes: bool) -> Self {
        self.adjusted = yes;
        self
    }

    /// Request the intraday series at the given sampling interval.
    #[must_use]
    pub const fn intraday(mut self, interval: IntradayInterval) -> Self {
        self.intraday = Some(interval);
        self
    }

    /// For intraday series, convert timestamps from the exchange's reported
    /// timezone to UTC. (Default: `true`; ignored for other variants.)
    #[must_use]
    pub const fn convert_to_utc(mut self, yes: bool) -> Self {
        self.convert_to_utc = yes;
        self
    }

    /// Set the `outputsize` parameter. (Default: compact.)
    #[must_use]
    pub const fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// The variant this builder is currently configured for.
    #[must_use]
    pub fn variant(&self) -> SeriesVariant {
        match self.intraday {
            Some(interval) => SeriesVariant::Intraday {
                interval,
                convert_to_utc: self.convert_to_utc,
            },
            None if self.adjusted => SeriesVariant::Adjusted(self.period),
            None => SeriesVariant::Plain(self.period),
        }
    }

    fn spec(&self) -> SeriesSpec {
        match self.variant() {
            SeriesVariant::Plain(period) => SeriesSpec {
                function: params::time_series_function(period, false),
                series_key: params::series_key(period).to_string(),
                fields: fields::PLAIN_FIELDS,
                granularity: TimeGranularity::Date,
            },
            SeriesVariant::Adjusted(period) => SeriesSpec {
                function: params::time_series_function(period, true),
                series_key: params::adjusted_series_key(period).to_string(),
                fields: fields::ADJUSTED_FIELDS,
                granularity: TimeGranularity::Date,
            },
            SeriesVariant::Intraday { interval, .. } => SeriesSpec {
                function: "TIME_SERIES_INTRADAY".to_string(),
                series_key: params::intraday_series_key(interval),
                fields: fields::PLAIN_FIELDS,
                granularity: TimeGranularity::DateTime,
            },
        }
    }

    /// The query parameters a fetch for `ticker` sends.
    #[must_use]
    pub fn request_parameters(&self, ticker: &str) -> Vec<(&'static str, String)> {
        let spec = self.spec();
        let mut parameters = vec![
            ("function", spec.function),
            ("symbol", ticker.to_string()),
            ("apikey", self.client.api_key().to_string()),
            ("outputsize", self.output_size.as_str().to_string()),
        ];
        if let Some(interval) = self.intraday {
            parameters.push(("interval", interval.as_param()));
        }
        parameters
    }

    /// Fetch and normalize the configured series for one ticker.
    ///
    /// # Errors
    ///
    /// Propagates transport errors, non-success statuses, JSON decode
    /// failures, unexpected response shapes, and timestamp/numeric parse
    /// failures. No retries.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(ticker = %ticker))
    )]
    pub async fn fetch(&self, ticker: &str) -> Result<PriceHistory, AvError> {
        let parameters = self.request_parameters(ticker);
        let (response, retrieved_at) = net::fetch_json(&self.client, &parameters).await?;
        self.from_response(ticker, &response, retrieved_at)
    }

    /// Normalize a raw response into a [`PriceHistory`].
    ///
    /// Public so canned responses can be transformed without a live server.
    ///
    /// # Errors
    ///
    /// Returns a shape error when the metadata or series object is absent,
    /// and a parse error when a timestamp or numeric field does not match
    /// its declared form.
    pub fn from_response(
        &self,
        ticker: &str,
        response: &serde_json::Value,
        retrieved_at: DateTime<Utc>,
    ) -> Result<PriceHistory, AvError> {
        let spec = self.spec();
        let raw = RawHistory::from_value(response, &spec.series_key)?;

        let timezone = raw.timezone()?.to_string();
        let (mut updated_at, leaked_intraday) =
            parse_refresh_time(raw.last_refreshed()?, spec.granularity)?;

        let mut bars = Vec::with_capacity(raw.series.len());
        for (time_string, record) in &raw.series {
            let ts = parse_time(time_string, spec.granularity)?;
            let parsed = fields::parse_record(record, spec.fields)?;
            bars.push(Bar::from_parsed(ts, parsed)?);
        }

        bars.sort_by_key(|b| b.ts);

        // A nominally daily response whose metadata carries a full datetime
        // is a known API quirk: the most recent entry is a partial intraday
        // record and gets dropped.
        if leaked_intraday {
            bars.pop();
        }

        if let SeriesVariant::Intraday {
            convert_to_utc: true,
            ..
        } = self.variant()
        {
            let cache = self.client.tz_cache();
            for bar in &mut bars {
                if let Ts::Local(naive) = bar.ts {
                    bar.ts = Ts::Utc(cache.convert_to_utc(naive, &timezone)?);
                }
            }
            if let Ts::Local(naive) = updated_at {
                updated_at = Ts::Utc(cache.convert_to_utc(naive, &timezone)?);
            }
        }

        Ok(PriceHistory {
            ticker: ticker.to_string(),
            bars,
            timezone,
            updated_at,
            retrieved_at,
        })
    }
}

fn parse_time(s: &str, granularity: TimeGranularity) -> Result<Ts, AvError> {
    match granularity {
        TimeGranularity::Date => crate::dates::parse_date(s).map(Ts::Date),
        TimeGranularity::DateTime => {
            crate::dates::parse_datetime(s, crate::dates::DATETIME_FORMAT).map(Ts::Local)
        }
    }
}

/// Parse the metadata refresh timestamp. For date-granularity series a
/// full datetime here means the series leaked intraday data; the first 10
/// characters still hold the date.
fn parse_refresh_time(
    refreshed: &str,
    granularity: TimeGranularity,
) -> Result<(Ts, bool), AvError> {
    match parse_time(refreshed, granularity) {
        Ok(ts) => Ok((ts, false)),
        Err(_) if granularity == TimeGranularity::Date => {
            let head = refreshed
                .get(0..10)
                .ok_or_else(|| AvError::Parse(format!("bad refresh time {refreshed:?}")))?;
            let ts = parse_time(head, granularity)?;
            Ok((ts, true))
        }
        Err(e) => Err(e),
    }
}
